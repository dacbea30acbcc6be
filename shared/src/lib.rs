pub mod collection;
pub mod colors;
pub mod country;
pub mod interaction;
pub mod navigation;
pub mod projection;
pub mod stats;
pub mod topology;
pub mod viewport;

pub use collection::*;
pub use navigation::{FilterParam, NavigationRequest};
pub use stats::{CollectionStats, CountryEntry, CountryIndex, CountryStatistic};
pub use topology::GeoFeature;
pub use viewport::Viewport;

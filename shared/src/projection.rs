use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

use crate::country;
use crate::topology::{GeoFeature, Position, Ring};

pub const VIEW_BOX_WIDTH: f64 = 800.0;
pub const VIEW_BOX_HEIGHT: f64 = 500.0;

/// Latitude where the square Mercator world ends.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Spherical Mercator with a fixed scale and translation, in viewbox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            scale: 130.0,
            translate: (400.0, 280.0),
        }
    }
}

impl Mercator {
    pub fn project(&self, [lon, lat]: Position) -> (f64, f64) {
        let lambda = lon.to_radians();
        let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        (
            self.translate.0 + self.scale * lambda,
            self.translate.1 - self.scale * (FRAC_PI_4 + phi / 2.0).tan().ln(),
        )
    }

    /// SVG path data for every ring of a feature, `M`/`L` commands closed with `Z`.
    ///
    /// A ring edge jumping more than half the globe in longitude starts a new
    /// subpath instead of drawing a line across the whole map.
    pub fn feature_path(&self, feature: &GeoFeature) -> String {
        let mut d = String::new();
        for ring in feature.polygons.iter().flatten() {
            self.push_ring(&mut d, ring);
        }
        d
    }

    fn push_ring(&self, d: &mut String, ring: &Ring) {
        let mut prev_lon: Option<f64> = None;
        for &position in ring {
            let (x, y) = self.project(position);
            let command = match prev_lon {
                Some(prev) if !crosses_antimeridian(prev, position[0]) => 'L',
                _ => 'M',
            };
            let _ = write!(d, "{command}{x:.2},{y:.2}");
            prev_lon = Some(position[0]);
        }
        if prev_lon.is_some() {
            d.push('Z');
        }
    }
}

fn crosses_antimeridian(from: f64, to: f64) -> bool {
    (to - from).abs() > 180.0 && from.abs() != 180.0 && to.abs() != 180.0
}

/// One renderable country outline.
#[derive(Debug, Clone, PartialEq)]
pub struct MapShape {
    /// Feature name as it appears in the topology.
    pub name: String,
    /// Canonical country key of `name`.
    pub key: String,
    pub path: String,
}

pub fn map_shapes(features: &[GeoFeature], projection: &Mercator) -> Vec<MapShape> {
    features
        .iter()
        .map(|feature| MapShape {
            name: feature.name.clone(),
            key: country::normalize(&feature.name),
            path: projection.feature_path(feature),
        })
        .filter(|shape| !shape.path.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-6,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn feature(name: &str, rings: Vec<Ring>) -> GeoFeature {
        GeoFeature {
            name: name.to_string(),
            id: None,
            polygons: vec![rings],
        }
    }

    #[test]
    fn origin_maps_to_translation() {
        let (x, y) = Mercator::default().project([0.0, 0.0]);
        assert_close(x, 400.0);
        assert_close(y, 280.0);
    }

    #[test]
    fn longitude_is_linear() {
        let proj = Mercator::default();
        let (x, _) = proj.project([180.0, 0.0]);
        assert_close(x, 400.0 + 130.0 * std::f64::consts::PI);
        let (x, _) = proj.project([-90.0, 10.0]);
        assert_close(x, 400.0 - 130.0 * std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn north_is_up_and_symmetric() {
        let proj = Mercator::default();
        let (_, north) = proj.project([0.0, 45.0]);
        let (_, south) = proj.project([0.0, -45.0]);
        assert!(north < 280.0);
        assert_close(north - 280.0, 280.0 - south);
    }

    #[test]
    fn poles_are_clamped_to_finite_values() {
        let proj = Mercator::default();
        let (_, top) = proj.project([0.0, 90.0]);
        let (_, edge) = proj.project([0.0, MAX_LATITUDE]);
        assert!(top.is_finite());
        assert_close(top, edge);
        assert_close(edge, 280.0 - 130.0 * std::f64::consts::PI);
    }

    #[test]
    fn ring_renders_as_closed_subpath() {
        let square = feature(
            "Square",
            vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
        );
        let d = Mercator::default().feature_path(&square);
        assert!(d.starts_with("M400.00,280.00L402.27,280.00"), "{d}");
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), 3);
    }

    #[test]
    fn each_ring_starts_its_own_subpath() {
        let holed = feature(
            "Holed",
            vec![
                vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]],
                vec![[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]],
            ],
        );
        let d = Mercator::default().feature_path(&holed);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn antimeridian_jump_breaks_the_line() {
        let straddling = feature(
            "Straddle",
            vec![vec![
                [179.0, -16.0],
                [-179.5, -16.5],
                [-179.5, -17.0],
                [179.0, -16.0],
            ]],
        );
        let d = Mercator::default().feature_path(&straddling);
        assert_eq!(d.matches('M').count(), 3);
    }

    #[test]
    fn edges_along_the_antimeridian_stay_connected() {
        let edge = feature(
            "Edge",
            vec![vec![[180.0, 60.0], [-180.0, 60.0], [-170.0, 65.0], [180.0, 60.0]]],
        );
        let d = Mercator::default().feature_path(&edge);
        assert_eq!(d.matches('M').count(), 1);
    }

    #[test]
    fn shapes_carry_canonical_keys_and_skip_empty_geometry() {
        let features = vec![
            feature("United States of America", vec![vec![[-100.0, 40.0], [-90.0, 40.0], [-90.0, 45.0], [-100.0, 40.0]]]),
            GeoFeature {
                name: "Nowhere".to_string(),
                id: None,
                polygons: Vec::new(),
            },
        ];
        let shapes = map_shapes(&features, &Mercator::default());
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].key, "united states of america");
        assert_eq!(shapes[0].name, "United States of America");
    }
}

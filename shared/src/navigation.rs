use crate::collection::ViewMode;
use crate::stats::CountryIndex;

/// Gallery filter a country click navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    BoughtCountry,
    Country,
}

impl FilterParam {
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Purchase => Self::BoughtCountry,
            ViewMode::Origin => Self::Country,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BoughtCountry => "boughtCountry",
            Self::Country => "country",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub param: FilterParam,
    /// Display name as written in the collection data.
    pub value: String,
}

impl NavigationRequest {
    pub fn new(param: FilterParam, value: impl Into<String>) -> Self {
        Self {
            param,
            value: value.into(),
        }
    }

    /// Gallery URL, e.g. `/?boughtCountry=Czech%20Republic`. `encode` is the
    /// URI-component encoder of the host environment.
    pub fn query_path(&self, encode: impl FnOnce(&str) -> String) -> String {
        format!("/?{}={}", self.param.name(), encode(&self.value))
    }
}

/// Navigation for a click on a map feature; `None` for countries without data.
pub fn navigation_for(
    country: &str,
    index: &CountryIndex,
    mode: ViewMode,
) -> Option<NavigationRequest> {
    let entry = index.get(country)?;
    Some(NavigationRequest::new(
        FilterParam::for_mode(mode),
        entry.original_name.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CountryStatistic;

    fn index() -> CountryIndex {
        CountryIndex::build(&[
            CountryStatistic {
                country: "USA".to_string(),
                count: 4,
            },
            CountryStatistic {
                country: "Czech Republic".to_string(),
                count: 2,
            },
        ])
    }

    #[test]
    fn click_uses_original_display_name() {
        let nav = navigation_for("United States of America", &index(), ViewMode::Purchase)
            .expect("navigation");
        assert_eq!(nav.param, FilterParam::BoughtCountry);
        assert_eq!(nav.value, "USA");
        assert_eq!(nav.query_path(str::to_string), "/?boughtCountry=USA");
    }

    #[test]
    fn origin_mode_filters_by_brand_country() {
        let nav = navigation_for("Czechia", &index(), ViewMode::Origin).expect("navigation");
        assert_eq!(nav.param.name(), "country");
        assert_eq!(
            nav.query_path(|value| value.replace(' ', "%20")),
            "/?country=Czech%20Republic"
        );
    }

    #[test]
    fn click_without_data_is_a_no_op() {
        assert_eq!(navigation_for("Narnia", &index(), ViewMode::Purchase), None);
    }

    #[test]
    fn only_the_value_is_encoded() {
        let nav = NavigationRequest::new(FilterParam::BoughtCountry, "a=b");
        let mut seen = String::new();
        let path = nav.query_path(|value| {
            seen = value.to_string();
            "ENC".to_string()
        });
        assert_eq!(seen, "a=b");
        assert_eq!(path, "/?boughtCountry=ENC");
    }
}

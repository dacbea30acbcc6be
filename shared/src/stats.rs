use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collection::{Brand, ViewMode};
use crate::country;

/// Glass count for one country, keyed by the display name from the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStatistic {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_glasses: usize,
    pub total_brands: usize,
    pub unique_countries: usize,
    /// Sorted by count descending; ties keep first-encounter order.
    pub country_data: Vec<CountryStatistic>,
}

/// Reduce the collection into per-country counts for the given mode.
///
/// Glasses or brands without a country are left out of every bucket, so the
/// per-country sum only matches `total_glasses` when every entry has one.
pub fn aggregate(brands: &[Brand], mode: ViewMode) -> CollectionStats {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut country_data: Vec<CountryStatistic> = Vec::new();

    let mut bump = |country: &str, amount: usize| {
        if let Some(&slot) = slots.get(country) {
            country_data[slot].count += amount;
        } else {
            slots.insert(country.to_string(), country_data.len());
            country_data.push(CountryStatistic {
                country: country.to_string(),
                count: amount,
            });
        }
    };

    match mode {
        ViewMode::Purchase => {
            for glass in brands.iter().flat_map(|brand| &brand.glasses) {
                if let Some(country) = glass.bought_country() {
                    bump(country, 1);
                }
            }
        }
        ViewMode::Origin => {
            for brand in brands {
                if !brand.from_country.is_empty() {
                    bump(&brand.from_country, brand.glasses.len());
                }
            }
        }
    }

    // A brand with no glasses still registers its origin country at zero;
    // keep only buckets that actually hold glasses.
    country_data.retain(|stat| stat.count > 0);
    country_data.sort_by(|a, b| b.count.cmp(&a.count));

    CollectionStats {
        total_glasses: brands.iter().map(|brand| brand.glasses.len()).sum(),
        total_brands: brands.len(),
        unique_countries: country_data.len(),
        country_data,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub count: usize,
    /// Display name as it appeared in the collection data.
    pub original_name: String,
}

/// Join table between collection statistics and map geometry, keyed by
/// canonical country key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryIndex {
    entries: HashMap<String, CountryEntry>,
}

impl CountryIndex {
    /// One entry per canonical key. When several spellings share a key, the
    /// first (highest-count) one wins with its own count, so the entry always
    /// matches what a filter on `original_name` finds.
    pub fn build(country_data: &[CountryStatistic]) -> Self {
        let mut entries: HashMap<String, CountryEntry> = HashMap::with_capacity(country_data.len());
        for stat in country_data {
            entries
                .entry(country::normalize(&stat.country))
                .or_insert_with(|| CountryEntry {
                    count: stat.count,
                    original_name: stat.country.clone(),
                });
        }
        Self { entries }
    }

    /// Look up any spelling of a country.
    pub fn get(&self, name: &str) -> Option<&CountryEntry> {
        self.entries.get(&country::normalize(name))
    }

    pub fn get_key(&self, key: &str) -> Option<&CountryEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Glass;

    fn glass(bought: Option<&str>) -> Glass {
        Glass {
            bought_country: bought.map(str::to_string),
            ..Glass::default()
        }
    }

    fn brand(origin: &str, bought: &[Option<&str>]) -> Brand {
        Brand {
            name: format!("{origin} brewery"),
            from_country: origin.to_string(),
            glasses: bought.iter().copied().map(glass).collect(),
            ..Brand::default()
        }
    }

    fn stat(country: &str, count: usize) -> CountryStatistic {
        CountryStatistic {
            country: country.to_string(),
            count,
        }
    }

    #[test]
    fn empty_collection_yields_zero_totals() {
        for mode in [ViewMode::Purchase, ViewMode::Origin] {
            assert_eq!(aggregate(&[], mode), CollectionStats::default());
        }
    }

    #[test]
    fn origin_mode_weights_by_glass_count() {
        let brands = vec![
            brand("Spain", &[Some("Spain")]),
            brand("Ireland", &[Some("Ireland"), Some("Ireland")]),
        ];
        let stats = aggregate(&brands, ViewMode::Origin);
        assert_eq!(stats.country_data, vec![stat("Ireland", 2), stat("Spain", 1)]);
        assert_eq!(stats.total_glasses, 3);
        assert_eq!(stats.total_brands, 2);
        assert_eq!(stats.unique_countries, 2);
    }

    #[test]
    fn purchase_mode_counts_each_glass() {
        let brands = vec![
            brand("Belgium", &[Some("France"), Some("Belgium"), Some("France")]),
            brand("Germany", &[Some("Germany")]),
        ];
        let stats = aggregate(&brands, ViewMode::Purchase);
        assert_eq!(
            stats.country_data,
            vec![stat("France", 2), stat("Belgium", 1), stat("Germany", 1)]
        );
    }

    #[test]
    fn purchase_mode_skips_glasses_without_country() {
        let brands = vec![brand("Japan", &[Some("Japan"), None, Some("")])];
        let stats = aggregate(&brands, ViewMode::Purchase);
        assert_eq!(stats.country_data, vec![stat("Japan", 1)]);
        assert_eq!(stats.total_glasses, 3);
        assert_eq!(stats.unique_countries, 1);
    }

    #[test]
    fn origin_mode_skips_brands_without_country() {
        let brands = vec![brand("", &[Some("Italy")]), brand("Italy", &[None])];
        let stats = aggregate(&brands, ViewMode::Origin);
        assert_eq!(stats.country_data, vec![stat("Italy", 1)]);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let brands = vec![
            brand("Mexico", &[Some("Mexico")]),
            brand("Chile", &[Some("Chile")]),
            brand("Peru", &[Some("Peru"), Some("Peru")]),
            brand("Brazil", &[Some("Brazil")]),
        ];
        let stats = aggregate(&brands, ViewMode::Purchase);
        let order: Vec<&str> = stats.country_data.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(order, vec!["Peru", "Mexico", "Chile", "Brazil"]);
    }

    #[test]
    fn purchase_counts_sum_to_total_when_every_glass_has_a_country() {
        let brands = vec![
            brand("Belgium", &[Some("Belgium"), Some("Netherlands")]),
            brand("USA", &[Some("USA"), Some("Canada"), Some("USA")]),
            brand("Czechia", &[]),
            brand("UK", &[Some("Spain")]),
        ];
        let stats = aggregate(&brands, ViewMode::Purchase);
        let sum: usize = stats.country_data.iter().map(|s| s.count).sum();
        assert_eq!(sum, stats.total_glasses);
    }

    #[test]
    fn origin_counts_sum_to_total_when_every_brand_has_a_country() {
        let brands = vec![
            brand("Belgium", &[None, None, None]),
            brand("Czechia", &[]),
            brand("Ireland", &[Some("Spain")]),
        ];
        let stats = aggregate(&brands, ViewMode::Origin);
        let sum: usize = stats.country_data.iter().map(|s| s.count).sum();
        assert_eq!(sum, stats.total_glasses);
        assert_eq!(stats.country_data, vec![stat("Belgium", 3), stat("Ireland", 1)]);
    }

    #[test]
    fn index_resolves_any_spelling() {
        let index = CountryIndex::build(&[stat("USA", 4), stat("Spain", 2)]);
        let entry = index.get("United States of America").expect("usa entry");
        assert_eq!(entry.count, 4);
        assert_eq!(entry.original_name, "USA");
        assert!(index.contains(" spain "));
        assert!(!index.contains("Narnia"));
        assert_eq!(
            index.get_key("united states of america").map(|e| e.count),
            Some(4)
        );
    }

    #[test]
    fn index_keeps_first_of_aliased_spellings() {
        let index = CountryIndex::build(&[stat("USA", 3), stat("United States of America", 2)]);
        assert_eq!(index.len(), 1);
        let entry = index.get("us").expect("usa entry");
        assert_eq!(entry.count, 3);
        assert_eq!(entry.original_name, "USA");
    }

    #[test]
    fn index_count_matches_glasses_under_its_display_name() {
        let brands = vec![
            brand("USA", &[Some("USA"), Some("USA")]),
            brand("Canada", &[Some("United States of America"), Some("USA")]),
            brand("Mexico", &[Some("United States of America")]),
        ];
        let stats = aggregate(&brands, ViewMode::Purchase);
        let index = CountryIndex::build(&stats.country_data);
        let entry = index.get("United States of America").expect("usa entry");

        let filtered = brands
            .iter()
            .flat_map(|brand| &brand.glasses)
            .filter(|glass| glass.bought_country() == Some(entry.original_name.as_str()))
            .count();
        assert_eq!(entry.count, filtered);
        assert_eq!(entry.count, 3);

        let max = crate::colors::max_count(&stats.country_data);
        assert!(entry.count <= max);
    }
}

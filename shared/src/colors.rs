use crate::stats::{CountryIndex, CountryStatistic};

/// Fill for countries with no glasses.
pub const NO_DATA_FILL: &str = "#e2e8f0";

/// (hue°, saturation, lightness) at intensity 0.
pub const LOW_HSL: (f64, f64, f64) = (210.0, 0.70, 0.75);
/// (hue°, saturation, lightness) at intensity 1.
pub const HIGH_HSL: (f64, f64, f64) = (210.0, 1.0, 0.30);

pub const LEGEND_STOPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Point on the ramp at `t` in [0, 1]. Both ends share a hue, so every
/// channel moves linearly.
pub fn ramp_hsl(t: f64) -> (f64, f64, f64) {
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    (
        lerp(LOW_HSL.0, HIGH_HSL.0),
        lerp(LOW_HSL.1, HIGH_HSL.1),
        lerp(LOW_HSL.2, HIGH_HSL.2),
    )
}

/// CSS `hsl()` string. Fixed precision keeps equal inputs byte-identical.
pub fn hsl_css((h, s, l): (f64, f64, f64)) -> String {
    format!("hsl({h:.0}, {:.1}%, {:.1}%)", s * 100.0, l * 100.0)
}

/// Ramp color for an intensity in [0, 1]; out-of-range values clamp.
pub fn fill_for_intensity(intensity: f64) -> String {
    let t = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    hsl_css(ramp_hsl(t))
}

/// Largest per-country count, never below 1.
pub fn max_count(country_data: &[CountryStatistic]) -> usize {
    country_data
        .iter()
        .map(|stat| stat.count)
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Choropleth fill for a map feature name.
pub fn color_for(country: &str, index: &CountryIndex, max_count: usize) -> String {
    let Some(entry) = index.get(country) else {
        return NO_DATA_FILL.to_string();
    };
    let intensity = entry.count as f64 / max_count.max(1) as f64;
    fill_for_intensity(intensity)
}

pub fn legend_swatches() -> Vec<String> {
    LEGEND_STOPS.iter().map(|&t| fill_for_intensity(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    fn stat(country: &str, count: usize) -> CountryStatistic {
        CountryStatistic {
            country: country.to_string(),
            count,
        }
    }

    #[test]
    fn ramp_darkens_as_intensity_grows() {
        assert_eq!(ramp_hsl(0.0), LOW_HSL);
        assert_eq!(ramp_hsl(1.0), HIGH_HSL);

        let quarter = ramp_hsl(0.25);
        assert_close(quarter.0, 210.0);
        assert_close(quarter.1, 0.775);
        assert_close(quarter.2, 0.6375);

        let lightness: Vec<f64> = LEGEND_STOPS.iter().map(|&t| ramp_hsl(t).2).collect();
        assert!(lightness.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(fill_for_intensity(0.0), "hsl(210, 70.0%, 75.0%)");
        assert_eq!(fill_for_intensity(1.0), "hsl(210, 100.0%, 30.0%)");
        assert_eq!(fill_for_intensity(0.5), "hsl(210, 85.0%, 52.5%)");
    }

    #[test]
    fn ramp_clamps_out_of_range_intensity() {
        assert_eq!(fill_for_intensity(-3.0), fill_for_intensity(0.0));
        assert_eq!(fill_for_intensity(7.5), fill_for_intensity(1.0));
        assert_eq!(fill_for_intensity(f64::NAN), fill_for_intensity(0.0));
    }

    #[test]
    fn absent_country_gets_no_data_fill_for_any_max() {
        let index = CountryIndex::build(&[stat("Spain", 2)]);
        for max in [0, 1, 2, 1000] {
            assert_eq!(color_for("Narnia", &index, max), NO_DATA_FILL);
        }
    }

    #[test]
    fn color_is_deterministic() {
        let index = CountryIndex::build(&[stat("Spain", 3), stat("France", 7)]);
        assert_eq!(color_for("Spain", &index, 7), color_for("spain", &index, 7));
        assert_eq!(color_for("France", &index, 7), "hsl(210, 100.0%, 30.0%)");
    }

    #[test]
    fn zero_max_count_is_treated_as_one() {
        let index = CountryIndex::build(&[stat("Spain", 1)]);
        assert_eq!(color_for("Spain", &index, 0), fill_for_intensity(1.0));
    }

    #[test]
    fn count_above_max_saturates() {
        let index = CountryIndex::build(&[stat("Spain", 9)]);
        assert_eq!(color_for("Spain", &index, 3), fill_for_intensity(1.0));
    }

    #[test]
    fn max_count_floors_at_one() {
        assert_eq!(max_count(&[]), 1);
        assert_eq!(max_count(&[stat("Peru", 4), stat("Chile", 11)]), 11);
    }

    #[test]
    fn legend_has_five_ordered_swatches() {
        let swatches = legend_swatches();
        assert_eq!(swatches.len(), 5);
        assert_eq!(swatches[0], fill_for_intensity(0.0));
        assert_eq!(swatches[4], fill_for_intensity(1.0));
    }
}

//! Weather-condition label lookup
//!
//! Maps the numeric condition codes reported by the forecast service to
//! short display labels for the forecast cells. Clear sky resolves to a sun
//! or moon label depending on whether the timestamp falls between sunrise
//! and sunset; the 7xx (atmosphere) and 9xx (additional) code groups have no
//! day/night variants.

/// Display label for a weather-condition code.
///
/// Unknown codes map to a neutral placeholder rather than failing.
pub fn condition_label(code: u16, is_day: bool) -> &'static str {
    match code {
        200..=299 => "storm",
        300..=399 => "drizzle",
        500..=599 => "rain",
        600..=699 => "snow",
        // atmosphere group, no day/night variant
        700..=799 => "fog",
        800 => {
            if is_day {
                "sun"
            } else {
                "moon"
            }
        }
        801..=804 => "clouds",
        // legacy additional group, no day/night variant
        900..=999 => "alert",
        _ => "--",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky_follows_daylight() {
        assert_eq!(condition_label(800, true), "sun");
        assert_eq!(condition_label(800, false), "moon");
    }

    #[test]
    fn test_atmosphere_group_ignores_daylight() {
        assert_eq!(condition_label(741, true), condition_label(741, false));
        assert_eq!(condition_label(905, true), condition_label(905, false));
    }

    #[test]
    fn test_condition_groups() {
        assert_eq!(condition_label(212, true), "storm");
        assert_eq!(condition_label(311, false), "drizzle");
        assert_eq!(condition_label(502, true), "rain");
        assert_eq!(condition_label(615, false), "snow");
        assert_eq!(condition_label(803, true), "clouds");
    }

    #[test]
    fn test_unknown_code_is_placeholder() {
        assert_eq!(condition_label(42, true), "--");
        assert_eq!(condition_label(1200, false), "--");
    }
}

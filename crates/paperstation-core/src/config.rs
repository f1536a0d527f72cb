//! Runtime configuration.
//!
//! Loaded from a TOML file by the binary and overridden by CLI flags.
//! Every field has a default so a missing or partial file still yields a
//! working configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display driver name; commands that touch the panel require one.
    pub driver: Option<String>,

    /// Seconds between poll ticks.
    pub poll_interval_secs: u64,

    /// Full-refresh period N: a full panel refresh is forced at least every
    /// N counted ticks (ghosting mitigation).
    pub full_refresh_every: u32,

    /// Use partial updates where the display supports them.
    pub partial: bool,

    /// Locale tag for the date line, e.g. `cs_CZ`.
    pub locale: String,

    /// Directory for demo renderings and bitmap-driver output.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            driver: None,
            poll_interval_secs: 30,
            full_refresh_every: 5,
            partial: true,
            locale: "cs_CZ".to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.full_refresh_every, 5);
        assert!(config.partial);
        assert_eq!(config.locale, "cs_CZ");
        assert!(config.driver.is_none());
    }
}

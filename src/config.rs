//! Runtime configuration read from the environment

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DATA_DIR_VAR: &str = "NESTWISE_DATA_DIR";
pub const DELAY_MS_VAR: &str = "NESTWISE_DELAY_MS";
pub const LOG_VAR: &str = "NESTWISE_LOG";

const DEFAULT_DATA_DIR: &str = "nestwise_data";
const DEFAULT_DELAY_MS: u64 = 500;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding one JSON file per stored key
    pub data_dir: PathBuf,
    /// Pause standing in for backend latency
    pub simulated_delay: Duration,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            simulated_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or invalid values keep defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(DELAY_MS_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.simulated_delay = Duration::from_millis(ms),
                Err(_) => warn!("Ignoring invalid {}={:?}", DELAY_MS_VAR, raw),
            }
        }

        if let Some(level) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(AppConfig::from_lookup(|_| None), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATA_DIR_VAR, "/tmp/nest"),
            (DELAY_MS_VAR, "0"),
            (LOG_VAR, "debug"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/nest"));
        assert_eq!(config.simulated_delay, Duration::ZERO);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_delay_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(DELAY_MS_VAR, "soon")]));
        assert_eq!(config.simulated_delay, Duration::from_millis(DEFAULT_DELAY_MS));
    }
}

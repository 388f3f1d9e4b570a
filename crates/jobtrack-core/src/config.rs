use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    "info".to_string()
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string()
}

/// User configuration read from `config.toml`.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Directory holding the persisted store and logs.
    /// Falls back to the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Default tracing filter, overridden by `JOBTRACK_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// chrono format string used when displaying application dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
            date_format: default_date_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: TrackerConfig = toml::from_str("").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: TrackerConfig =
            toml::from_str("data_dir = \"/tmp/jobs\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/jobs")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.date_format, "%B %-d, %Y");
    }
}

//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the tracker configuration
//! from the configuration file (~/.config/jobtrack/config.toml).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use jobtrack_core::config::TrackerConfig;
use jobtrack_core::error::{JobTrackError, Result};

use crate::paths::JobTrackPaths;

/// Configuration service that loads the tracker configuration.
///
/// A missing file yields the defaults; a file that exists but does not parse
/// is reported as a configuration error rather than silently ignored.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default config file.
    pub fn new() -> Result<Self> {
        let path = JobTrackPaths::config_file().map_err(|e| JobTrackError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a ConfigService with a custom path (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<TrackerConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", self.path.display());
                return Ok(TrackerConfig::default());
            }
            Err(e) => {
                return Err(JobTrackError::config(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|e| {
            JobTrackError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Resolves the data directory: explicit config value, else the platform default.
    pub fn resolve_data_dir(config: &TrackerConfig) -> Result<PathBuf> {
        match &config.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => JobTrackPaths::data_dir().map_err(|e| JobTrackError::config(e.to_string())),
        }
    }
}

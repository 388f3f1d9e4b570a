//! Unified path management for jobtrack configuration and data files.
//!
//! Paths are resolved through the `dirs` crate so they follow platform
//! conventions (XDG on Linux, `Library` on macOS, `AppData` on Windows).

use std::path::PathBuf;

const APP_DIR: &str = "jobtrack";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for jobtrack.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/jobtrack/          # Config directory
/// └── config.toml              # Application configuration
///
/// ~/.local/share/jobtrack/     # Data directory
/// ├── jobApplications.json     # Persisted application collection
/// └── logs/                    # Application logs
///     └── jobtrack.log.YYYY-MM-DD
/// ```
pub struct JobTrackPaths;

impl JobTrackPaths {
    /// Returns the jobtrack configuration directory (e.g., `~/.config/jobtrack/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the jobtrack data directory (e.g., `~/.local/share/jobtrack/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the logs directory beneath a data directory.
    pub fn logs_dir_in(data_dir: &std::path::Path) -> PathBuf {
        data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = JobTrackPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = JobTrackPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
        assert!(config_dir.ends_with("jobtrack"));
    }

    #[test]
    fn test_data_dir() {
        let data_dir = JobTrackPaths::data_dir().unwrap();
        assert!(data_dir.ends_with("jobtrack"));
    }

    #[test]
    fn test_logs_dir_in() {
        let logs = JobTrackPaths::logs_dir_in(std::path::Path::new("/tmp/jt"));
        assert_eq!(logs, PathBuf::from("/tmp/jt/logs"));
    }
}

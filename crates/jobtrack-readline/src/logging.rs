//! Tracing setup for the REPL.
//!
//! Persistent sessions log to a daily rolling file so log lines never
//! interleave with the interactive output on stdout. Ephemeral sessions
//! touch nothing on disk and only report warnings to stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use jobtrack_infrastructure::paths::JobTrackPaths;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "JOBTRACK_LOG";

/// Default filter for stderr logging in ephemeral sessions.
const EPHEMERAL_LEVEL: &str = "warn";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling files in this directory.
    Files(PathBuf),
    Stderr,
}

impl LogTarget {
    pub fn for_session(data_dir: &Path, ephemeral: bool) -> Self {
        if ephemeral {
            LogTarget::Stderr
        } else {
            LogTarget::Files(JobTrackPaths::logs_dir_in(data_dir))
        }
    }
}

fn filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered log lines are flushed.
pub fn init(target: &LogTarget, default_level: &str) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Files(logs_dir) => {
            std::fs::create_dir_all(logs_dir).with_context(|| {
                format!("Failed to create log directory {}", logs_dir.display())
            })?;

            let appender = tracing_appender::rolling::daily(logs_dir, "jobtrack.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter_or(default_level))
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter_or(EPHEMERAL_LEVEL))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

            Ok(None)
        }
    }
}

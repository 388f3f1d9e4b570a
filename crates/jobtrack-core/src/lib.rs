pub mod application;
pub mod config;
pub mod error;
pub mod storage;

// Re-export common error type
pub use error::JobTrackError;

//! Application layer for jobtrack.
//!
//! This crate owns the in-memory application collection and the transient
//! UI selection state, and keeps the collection written through to a
//! repository from the infrastructure layer.

pub mod edit;
pub mod tracker;

pub use edit::EditState;
pub use tracker::ApplicationTracker;

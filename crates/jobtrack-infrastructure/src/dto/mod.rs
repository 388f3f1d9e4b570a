//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the persisted schema. They are private to the
//! infrastructure layer so the domain model can evolve without changing
//! what is already on disk.
//!
//! ### ApplicationRecord Version History
//! - **1**: `id`, `companyName`, `jobTitle`, `dateApplied`, `status`, `details`

mod application;

pub use application::{ApplicationRecordV1, decode_collection, encode_collection};

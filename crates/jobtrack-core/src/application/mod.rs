//! Job application domain models and repository traits.

mod id;
mod model;
mod repository;
mod view;

pub use id::IdGenerator;
pub use model::{ApplicationDraft, ApplicationField, ApplicationRecord, ApplicationStatus};
pub use repository::{ApplicationRepository, STORAGE_KEY};
pub use view::{StatusSummary, format_date};

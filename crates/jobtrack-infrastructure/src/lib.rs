pub mod application_repository;
pub mod config_service;
pub mod dto;
pub mod paths;
pub mod seed;
pub mod storage;

pub use crate::application_repository::KvApplicationRepository;
pub use crate::config_service::ConfigService;
pub use crate::storage::{FileStore, MemoryStore};

//! Infrastructure layer - Settings persistence

pub mod config;
pub mod repository;

pub use repository::{ConfigRepository, FileSystemRepository};

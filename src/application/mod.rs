//! Application layer - Use cases and orchestration

pub mod edit_tags;
pub mod init;
pub mod manage_config;

pub use edit_tags::TagEditService;
pub use init::InitService;
pub use manage_config::{ConfigService, SettingsOverrides};

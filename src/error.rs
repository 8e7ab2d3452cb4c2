//! Error types for taglist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for taglist
#[derive(Debug, Error)]
pub enum TagListError {
    #[error("Invalid option key: {0}")]
    InvalidOptionKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not a taglist directory: {0}")]
    NotInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagListError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagListError::NotInitialized(_) => 2,
            TagListError::InvalidOptionKey(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagListError::NotInitialized(path) => {
                format!(
                    "Not a taglist directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'taglist init' in this directory to create a config\n\
                    • Navigate to a directory containing .taglist\n\
                    • Set TAGLIST_ROOT environment variable to your config root",
                    path.display()
                )
            }
            TagListError::InvalidOptionKey(key) => {
                format!(
                    "Invalid option key: '{}'\n\n\
                    Valid options:\n\
                    • parse=true|false\n\n\
                    Example:\n\
                    taglist add 'One, Two' 'Three, Four' -o parse=true",
                    key
                )
            }
            TagListError::InvalidConfig(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: delimiter, glue, force_lowercase, force_parameterize, parser\n\
                        Example: taglist config glue ' | '",
                        msg
                    )
                } else if msg.contains("empty") {
                    format!(
                        "{}\n\n\
                        Delimiters and glue must be non-empty strings\n\
                        Example: taglist config delimiter '[\",\", \";\"]'",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagListError
pub type Result<T> = std::result::Result<T, TagListError>;

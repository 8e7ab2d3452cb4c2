//! Config management use case

use crate::domain::tags::{Delimiter, ParserKind, TagConfig};
use crate::error::{Result, TagListError};
use crate::infrastructure::{ConfigRepository, FileSystemRepository};
use log::debug;
use serde::Deserialize;
use std::str::FromStr;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 5] = [
    "delimiter",
    "glue",
    "force_lowercase",
    "force_parameterize",
    "parser",
];

/// Service for managing persisted settings
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        config_value(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        set_config_value(&mut config, key, value)?;
        self.repository.save_config(&config)?;
        debug!("set {} in {}", key, self.repository.root().display());
        Ok(())
    }
}

/// Render one setting as text
pub fn config_value(config: &TagConfig, key: &str) -> Result<String> {
    match key {
        "delimiter" => Ok(config.delimiter().to_string()),
        "glue" => Ok(format!("{:?}", config.glue())),
        "force_lowercase" => Ok(config.force_lowercase().to_string()),
        "force_parameterize" => Ok(config.force_parameterize().to_string()),
        "parser" => Ok(config.parser().to_string()),
        _ => Err(unknown_key(key)),
    }
}

/// Update one setting from text
pub fn set_config_value(config: &mut TagConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "delimiter" => config.set_delimiter(parse_delimiter(value)?),
        "glue" => config.set_glue(value),
        "force_lowercase" => {
            config.set_force_lowercase(parse_bool(key, value)?);
            Ok(())
        }
        "force_parameterize" => {
            config.set_force_parameterize(parse_bool(key, value)?);
            Ok(())
        }
        "parser" => {
            let parser = ParserKind::from_str(value).map_err(TagListError::InvalidConfig)?;
            config.set_parser(parser);
            Ok(())
        }
        _ => Err(unknown_key(key)),
    }
}

/// Per-invocation settings layered over the persisted ones
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub delimiters: Vec<String>,
    pub glue: Option<String>,
    pub force_lowercase: bool,
    pub force_parameterize: bool,
}

impl SettingsOverrides {
    pub fn apply(&self, config: &mut TagConfig) -> Result<()> {
        match self.delimiters.as_slice() {
            [] => {}
            [single] => config.set_delimiter(single.as_str())?,
            many => config.set_delimiter(many.to_vec())?,
        }
        if let Some(glue) = &self.glue {
            config.set_glue(glue.as_str())?;
        }
        if self.force_lowercase {
            config.set_force_lowercase(true);
        }
        if self.force_parameterize {
            config.set_force_parameterize(true);
        }
        Ok(())
    }
}

/// A TOML array literal sets several alternatives, anything else is one literal delimiter
fn parse_delimiter(value: &str) -> Result<Delimiter> {
    #[derive(Deserialize)]
    struct Wrapper {
        delimiter: Delimiter,
    }

    if value.trim_start().starts_with('[') {
        let wrapper: Wrapper = toml::from_str(&format!("delimiter = {}", value))
            .map_err(|e| TagListError::InvalidConfig(format!("Invalid delimiter list: {}", e)))?;
        Ok(wrapper.delimiter)
    } else {
        Ok(Delimiter::from(value))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        TagListError::InvalidConfig(format!(
            "Invalid value for '{}': '{}'. Expected true or false",
            key, value
        ))
    })
}

fn unknown_key(key: &str) -> TagListError {
    TagListError::InvalidConfig(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

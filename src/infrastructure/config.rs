//! Configuration file management

use crate::domain::TagConfig;
use crate::error::{Result, TagListError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding taglist state inside a root
pub const CONFIG_DIR: &str = ".taglist";

/// Config file name inside `CONFIG_DIR`
pub const CONFIG_FILE: &str = "config.toml";

/// Path of the config file for a given root
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load config from .taglist/config.toml in the given directory
pub fn load_from_dir(path: &Path) -> Result<TagConfig> {
    let config_path = config_path(path);

    let contents = fs::read_to_string(&config_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TagListError::NotInitialized(path.to_path_buf())
        } else {
            TagListError::Io(e)
        }
    })?;

    let config: TagConfig = toml::from_str(&contents)?;
    config.validate()?;

    debug!("loaded config from {}", config_path.display());
    Ok(config)
}

/// Save config to .taglist/config.toml in the given directory
pub fn save_to_dir(config: &TagConfig, path: &Path) -> Result<()> {
    let dir = path.join(CONFIG_DIR);

    // Ensure .taglist directory exists
    if !dir.exists() {
        fs::create_dir(&dir)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(config_path(path), contents)?;

    debug!("saved config to {}", dir.display());
    Ok(())
}

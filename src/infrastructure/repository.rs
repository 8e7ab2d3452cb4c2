//! File system repository for persisted settings

use crate::domain::TagConfig;
use crate::error::{Result, TagListError};
use crate::infrastructure::config::{self, CONFIG_DIR};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the settings root directly
pub const ROOT_ENV: &str = "TAGLIST_ROOT";

/// Abstract repository for settings
pub trait ConfigRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .taglist/config.toml
    fn load_config(&self) -> Result<TagConfig>;

    /// Save configuration to .taglist/config.toml
    fn save_config(&self, config: &TagConfig) -> Result<()>;

    /// Check if .taglist directory exists
    fn is_initialized(&self) -> bool;

    /// Create .taglist directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of ConfigRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the settings root
    /// First checks TAGLIST_ROOT environment variable, then walks up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagListError::InvalidConfig(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'taglist init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    CONFIG_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the settings root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                debug!("found {} in {}", CONFIG_DIR, current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TagListError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    /// Load settings from a discovered root, or fall back to defaults
    ///
    /// Only a missing root falls back; a broken config file is still an error.
    pub fn load_or_default() -> Result<TagConfig> {
        match Self::discover() {
            Ok(repo) => repo.load_config(),
            Err(TagListError::NotInitialized(path)) => {
                debug!("no {} above {}, using defaults", CONFIG_DIR, path.display());
                Ok(TagConfig::default())
            }
            Err(e) => Err(e),
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl ConfigRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<TagConfig> {
        config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &TagConfig) -> Result<()> {
        config::save_to_dir(config, &self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(TagListError::InvalidConfig(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(CONFIG_DIR))?;
        Ok(())
    }
}

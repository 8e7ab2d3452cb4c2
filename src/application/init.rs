//! Initialize settings use case

use crate::domain::TagConfig;
use crate::error::Result;
use crate::infrastructure::{ConfigRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Service that creates a `.taglist` directory with default settings
pub struct InitService;

impl InitService {
    /// Initialize settings at the specified path
    pub fn execute(path: &Path) -> Result<()> {
        // Create the directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&TagConfig::default())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("project");

        InitService::execute(&target).unwrap();

        let content = fs::read_to_string(target.join(".taglist/config.toml")).unwrap();
        assert!(content.contains("delimiter = \",\""));
        assert!(content.contains("force_lowercase = false"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        assert!(InitService::execute(temp.path()).is_err());
    }
}

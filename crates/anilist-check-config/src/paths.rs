use anyhow::Result;
use std::path::{Path, PathBuf};

/// Overrides the config file location when set
pub const CONFIG_ENV_VAR: &str = "ANILIST_CHECK_CONFIG";

pub struct PathManager {
    config_dir: PathBuf,
    config_file_override: Option<PathBuf>,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("anilist-check");

        Ok(Self {
            config_dir: base_dir,
            config_file_override: std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        })
    }

    /// Path manager rooted at an explicit directory, ignoring the environment
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            config_dir: base_dir,
            config_file_override: None,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_file_override
            .clone()
            .unwrap_or_else(|| self.config_dir.join("config.toml"))
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if config dir can't be determined
            Self {
                config_file_override: std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
                ..Self::with_base_dir(PathBuf::from(".anilist-check"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_dir_layout() {
        let paths = PathManager::with_base_dir("/tmp/anilist-check-test");
        assert_eq!(paths.config_dir(), Path::new("/tmp/anilist-check-test"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/anilist-check-test/config.toml"));
    }
}

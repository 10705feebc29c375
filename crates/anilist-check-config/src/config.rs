use anilist_check_models::ListCategory;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";
pub const DEFAULT_USER_AGENT: &str = concat!("anilist-check/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub anilist: AnilistConfig,
    #[serde(default)]
    pub lists: ListNames,
    /// User checked when the command line doesn't name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnilistConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// AniList list names mapped onto the tracked categories.
///
/// Matched case-insensitively against the names the service returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListNames {
    #[serde(default = "default_watching")]
    pub watching: String,
    #[serde(default = "default_paused")]
    pub paused: String,
    #[serde(default = "default_planning")]
    pub planning: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_watching() -> String {
    ListCategory::Watching.default_list_name().to_string()
}

fn default_paused() -> String {
    ListCategory::Paused.default_list_name().to_string()
}

fn default_planning() -> String {
    ListCategory::Planning.default_list_name().to_string()
}

impl Default for AnilistConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ListNames {
    fn default() -> Self {
        Self {
            watching: default_watching(),
            paused: default_paused(),
            planning: default_planning(),
        }
    }
}

impl ListNames {
    pub fn name_for(&self, category: ListCategory) -> &str {
        match category {
            ListCategory::Watching => &self.watching,
            ListCategory::Paused => &self.paused,
            ListCategory::Planning => &self.planning,
        }
    }

    /// Whether a list returned by the service belongs to `category`, ignoring case
    pub fn matches(&self, category: ListCategory, list_name: &str) -> bool {
        self.name_for(category).to_lowercase() == list_name.to_lowercase()
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise. A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let endpoint = self.anilist.endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(anyhow::anyhow!(
                "anilist.endpoint must be an http(s) URL, got '{}'",
                self.anilist.endpoint
            ));
        }

        for category in ListCategory::SCAN_ORDER {
            if self.lists.name_for(category).trim().is_empty() {
                return Err(anyhow::anyhow!("lists.{} cannot be empty", category));
            }
        }

        if let Some(user) = &self.default_user {
            if user.trim().is_empty() {
                return Err(anyhow::anyhow!("default_user cannot be blank when set"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            anilist: AnilistConfig {
                endpoint: "http://localhost:8080/graphql".to_string(),
                ..AnilistConfig::default()
            },
            lists: ListNames {
                planning: "Plan to Watch".to_string(),
                ..ListNames::default()
            },
            default_user: Some("kyrielight".to_string()),
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.lists.watching, "Watching");
        assert_eq!(loaded.lists.planning, "Plan to Watch");
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.anilist.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.lists, ListNames::default());
        assert!(config.default_user.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_lists_section() {
        let config: Config = toml::from_str("[lists]\npaused = \"On Hold\"\n").unwrap();
        assert_eq!(config.lists.paused, "On Hold");
        assert_eq!(config.lists.watching, "Watching");
        assert_eq!(config.lists.planning, "Planning");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.anilist.endpoint = "graphql.anilist.co".to_string();
        assert!(config.validate().is_err());

        config.anilist.endpoint = DEFAULT_ENDPOINT.to_string();
        config.lists.paused = "  ".to_string();
        assert!(config.validate().is_err());

        config.lists.paused = "Paused".to_string();
        config.default_user = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_list_name_matching_ignores_case() {
        let names = ListNames::default();
        assert!(names.matches(ListCategory::Watching, "WATCHING"));
        assert!(names.matches(ListCategory::Paused, "paused"));
        assert!(names.matches(ListCategory::Planning, "Planning"));
        assert!(!names.matches(ListCategory::Watching, "Completed"));
        assert!(!names.matches(ListCategory::Watching, "Watching "));
    }
}

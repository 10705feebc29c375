pub mod check;
pub mod config;
pub mod lists;

use anilist_check_config::{Config, PathManager};
use color_eyre::Result;
use std::path::PathBuf;
use tracing::debug;

/// Config file from `--config`, else the env override, else the default location
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathManager::default().config_file())
}

pub fn load_config(path: &PathBuf) -> Result<Config> {
    debug!(path = %path.display(), exists = path.exists(), "Loading configuration");
    let config = Config::load_or_default(path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", path.display(), e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid config at {}: {}", path.display(), e))?;
    Ok(config)
}

/// User from the command line, falling back to `default_user`
pub fn resolve_user(user: Option<String>, config: &Config) -> Result<String> {
    if user.is_none() {
        debug!(default_user = ?config.default_user, "No user given, using default_user from config");
    }
    user.or_else(|| config.default_user.clone())
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| {
            color_eyre::eyre::eyre!("No AniList user given. Pass --user or set default_user in the config file")
        })
}

pub mod config;
pub mod paths;

pub use config::{AnilistConfig, Config, ListNames, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};
pub use paths::{PathManager, CONFIG_ENV_VAR};

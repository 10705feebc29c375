pub mod api;
pub mod client;

pub use anilist_check_config::DEFAULT_ENDPOINT;
pub use api::USER_ANIME_QUERY;
pub use client::{AnilistClient, HttpTransport};

pub mod anilist;
pub mod checker;
pub mod error;
pub mod matching;
pub mod show_id;
pub mod traits;

pub use anilist::{AnilistClient, HttpTransport};
pub use checker::WatchChecker;
pub use error::{CheckError, FetchError, InputError};
pub use matching::{find_by_id, find_by_name, is_match, strip_non_word, Hit};
pub use show_id::IntoShowId;
pub use traits::{Transport, TransportResponse};

/// Whether `user` is watching, has paused or plans to watch a show with the given title.
///
/// Uses the default configuration and the current tracing subscriber. Returns `true` when
/// AniList cannot be reached or answers with something unusable.
pub fn is_watching_by_name(user: &str, show_name: &str) -> bool {
    WatchChecker::new().is_watching_by_name(user, show_name)
}

/// Same as [`is_watching_by_name`], matching on the AniList media id.
///
/// Returns `false` without contacting AniList when `show_id` isn't an integer.
pub fn is_watching_by_id(user: &str, show_id: impl IntoShowId) -> bool {
    WatchChecker::new().is_watching_by_id(user, show_id)
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The AniList list categories a membership check looks at.
///
/// AniList has more (Completed, Dropped, Rewatching, custom lists); those are never queried.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    /// Currently watching ("Watching" on AniList)
    Watching,
    /// On hold ("Paused" on AniList)
    Paused,
    /// Plan to watch ("Planning" on AniList)
    Planning,
}

impl ListCategory {
    /// Order in which lists are scanned when looking for a show.
    pub const SCAN_ORDER: [ListCategory; 3] = [
        ListCategory::Watching,
        ListCategory::Paused,
        ListCategory::Planning,
    ];

    /// Name AniList gives this list by default.
    pub fn default_list_name(self) -> &'static str {
        match self {
            ListCategory::Watching => "Watching",
            ListCategory::Paused => "Paused",
            ListCategory::Planning => "Planning",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListCategory::Watching => "watching",
            ListCategory::Paused => "paused",
            ListCategory::Planning => "planning",
        }
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

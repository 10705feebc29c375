//! Title normalization and the list scans behind a membership check.

use anilist_check_models::{ListCategory, ListCollection, MediaRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Letters, numbers (including fractions and superscripts) and '_'; combining marks and
// other connector punctuation are stripped.
static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_]").expect("Invalid non-word regex")
});

/// First record found by a scan, and the list it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    pub category: ListCategory,
    pub record: &'a MediaRecord,
}

/// Remove every character that isn't a letter, number or underscore.
///
/// Unicode-aware, so native titles keep their kana and kanji.
pub fn strip_non_word(s: &str) -> String {
    NON_WORD_REGEX.replace_all(s, "").into_owned()
}

/// Titles are equal once whitespace and punctuation are stripped from both
pub fn is_match(a: &str, b: &str) -> bool {
    strip_non_word(a) == strip_non_word(b)
}

/// Scan watching, then paused, then planning for a record with a title matching `show_name`.
pub fn find_by_name<'a>(lists: &'a ListCollection, show_name: &str) -> Option<Hit<'a>> {
    let wanted = strip_non_word(show_name);
    debug!("Show name without punctuation: {}", wanted);

    for (category, records) in lists.iter_scan_order() {
        for record in records {
            for title in record.title.variants() {
                if strip_non_word(title) == wanted {
                    debug!("Matched {} to {} in {}", title, show_name, category);
                    return Some(Hit { category, record });
                }
            }
        }
    }

    debug!("Didn't find a match for {}", show_name);
    None
}

/// Scan watching, then paused, then planning for a record with the given media id.
pub fn find_by_id(lists: &ListCollection, show_id: i64) -> Option<Hit<'_>> {
    let hit = lists.iter_scan_order().find_map(|(category, records)| {
        records
            .iter()
            .find(|record| record.id == show_id)
            .map(|record| Hit { category, record })
    });

    match &hit {
        Some(hit) => debug!("Found show ID {} in {}", show_id, hit.category),
        None => debug!("Didn't find a match for {}", show_id),
    }

    hit
}

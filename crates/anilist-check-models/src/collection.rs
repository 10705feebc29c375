use crate::{ListCategory, MediaRecord};
use serde::{Deserialize, Serialize};

/// The three tracked lists of one user, as fetched by a single query.
///
/// Built fresh on every fetch. Records are neither deduplicated nor validated across lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCollection {
    pub watching: Vec<MediaRecord>,
    pub paused: Vec<MediaRecord>,
    pub plan_to_watch: Vec<MediaRecord>,
}

impl ListCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ListCategory) -> &[MediaRecord] {
        match category {
            ListCategory::Watching => &self.watching,
            ListCategory::Paused => &self.paused,
            ListCategory::Planning => &self.plan_to_watch,
        }
    }

    pub fn get_mut(&mut self, category: ListCategory) -> &mut Vec<MediaRecord> {
        match category {
            ListCategory::Watching => &mut self.watching,
            ListCategory::Paused => &mut self.paused,
            ListCategory::Planning => &mut self.plan_to_watch,
        }
    }

    /// Lists paired with their category, watching first, then paused, then planning.
    pub fn iter_scan_order(&self) -> impl Iterator<Item = (ListCategory, &[MediaRecord])> {
        ListCategory::SCAN_ORDER
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of records across the three lists
    pub fn len(&self) -> usize {
        self.watching.len() + self.paused.len() + self.plan_to_watch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

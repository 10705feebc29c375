use serde::{Deserialize, Deserializer, Serialize};

/// One show entry as AniList returns it inside a list entry's `media` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaRecord {
    pub id: i64,
    /// AniList types `title` as nullable; a null title behaves like one with no variants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: MediaTitle,
}

/// Localized title variants of a show. Any of them may be absent or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_preferred: Option<String>,
}

impl MediaRecord {
    pub fn new(id: i64, title: MediaTitle) -> Self {
        Self { id, title }
    }

    /// Best title for display: the user's preferred one, then romaji, english, native.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .user_preferred
            .as_deref()
            .or(self.title.romaji.as_deref())
            .or(self.title.english.as_deref())
            .or(self.title.native.as_deref())
    }
}

impl MediaTitle {
    pub fn romaji(title: impl Into<String>) -> Self {
        Self {
            romaji: Some(title.into()),
            ..Self::default()
        }
    }

    /// Present title variants in a fixed order: romaji, english, native, userPreferred.
    ///
    /// Empty strings are yielded; only missing/null variants are skipped.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        [&self.romaji, &self.english, &self.native, &self.user_preferred]
            .into_iter()
            .filter_map(|variant| variant.as_deref())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_record_from_wire_shape() {
        let record: MediaRecord = serde_json::from_value(json!({
            "id": 16498,
            "title": {
                "romaji": "Shingeki no Kyojin",
                "english": "Attack on Titan",
                "native": "進撃の巨人",
                "userPreferred": "Shingeki no Kyojin"
            }
        }))
        .unwrap();

        assert_eq!(record.id, 16498);
        assert_eq!(record.title.english.as_deref(), Some("Attack on Titan"));
        assert_eq!(record.title.user_preferred.as_deref(), Some("Shingeki no Kyojin"));
    }

    #[test]
    fn test_variants_skip_missing_and_keep_order() {
        let title = MediaTitle {
            romaji: Some("Kimi no Na wa.".to_string()),
            english: None,
            native: Some("君の名は。".to_string()),
            user_preferred: Some(String::new()),
        };

        let variants: Vec<&str> = title.variants().collect();
        assert_eq!(variants, vec!["Kimi no Na wa.", "君の名は。", ""]);
    }

    #[test]
    fn test_null_title_has_no_variants() {
        let record: MediaRecord = serde_json::from_value(json!({ "id": 1, "title": null })).unwrap();
        assert_eq!(record.title.variants().count(), 0);

        let record: MediaRecord = serde_json::from_value(json!({ "id": 2 })).unwrap();
        assert_eq!(record.title, MediaTitle::default());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<MediaRecord, _> =
            serde_json::from_value(json!({ "title": { "romaji": "Orphan" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_title_prefers_user_preferred() {
        let mut record = MediaRecord::new(5, MediaTitle::romaji("Romaji Title"));
        assert_eq!(record.display_title(), Some("Romaji Title"));

        record.title.user_preferred = Some("Preferred".to_string());
        assert_eq!(record.display_title(), Some("Preferred"));
    }
}

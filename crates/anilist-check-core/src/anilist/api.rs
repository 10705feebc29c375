use crate::error::FetchError;
use anilist_check_config::ListNames;
use anilist_check_models::{ListCollection, MediaRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Every anime list of a user, with id and all title variants of each entry
pub const USER_ANIME_QUERY: &str = r#"
query ($userName: String) {
    MediaListCollection(userName: $userName, type: ANIME) {
        lists {
            name
            entries {
                media {
                    id
                    title {
                        romaji
                        english
                        native
                        userPreferred
                    }
                }
            }
        }
    }
}
"#;

/// A list as returned by AniList. Entries stay raw until the list turns out to be one we track,
/// so lists we never look at can't fail the fetch.
#[derive(Debug, Deserialize)]
struct RawMediaList {
    name: String,
    entries: Value,
}

#[derive(Debug, Deserialize)]
struct MediaListEntry {
    media: MediaRecord,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Request body for [`USER_ANIME_QUERY`] bound to `user`
pub fn build_request(user: &str) -> Value {
    json!({
        "query": USER_ANIME_QUERY,
        "variables": { "userName": user },
    })
}

/// Parse a successful response body into the three tracked lists
pub fn parse_response(body: &str, names: &ListNames) -> Result<ListCollection, FetchError> {
    let json: Value = serde_json::from_str(body).map_err(FetchError::Parse)?;

    log_graphql_errors(&json);

    let lists = json
        .get("data")
        .and_then(|data| data.get("MediaListCollection"))
        .and_then(|collection| collection.get("lists"))
        .ok_or_else(|| FetchError::Shape("missing data.MediaListCollection.lists".to_string()))?;

    let lists = Vec::<RawMediaList>::deserialize(lists)
        .map_err(|e| FetchError::Shape(format!("malformed MediaListCollection.lists: {}", e)))?;

    extract_lists(&lists, names)
}

fn extract_lists(lists: &[RawMediaList], names: &ListNames) -> Result<ListCollection, FetchError> {
    let mut collection = ListCollection::new();

    for category in anilist_check_models::ListCategory::SCAN_ORDER {
        let list_name = names.name_for(category);

        for list in lists.iter().filter(|list| names.matches(category, &list.name)) {
            let entries = Vec::<MediaListEntry>::deserialize(&list.entries).map_err(|e| {
                warn!("Unable to process list entries for {}", list_name);
                FetchError::Shape(format!("malformed entries in list '{}': {}", list.name, e))
            })?;

            debug!(
                category = %category,
                list = %list.name,
                count = entries.len(),
                "Collected list entries"
            );

            collection
                .get_mut(category)
                .extend(entries.into_iter().map(|entry| entry.media));
        }
    }

    Ok(collection)
}

fn log_graphql_errors(json: &Value) {
    let Some(errors) = json.get("errors") else {
        return;
    };

    match Vec::<GraphQlError>::deserialize(errors) {
        Ok(errors) => {
            for error in errors {
                warn!("AniList reported a GraphQL error: {}", error.message);
            }
        }
        Err(_) => warn!("AniList reported errors in an unrecognized format: {}", errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anilist_check_models::ListCategory;

    fn names() -> ListNames {
        ListNames::default()
    }

    fn entry(id: i64, romaji: &str) -> Value {
        json!({ "media": { "id": id, "title": { "romaji": romaji, "english": null, "native": null, "userPreferred": romaji } } })
    }

    fn response(lists: Value) -> String {
        json!({ "data": { "MediaListCollection": { "lists": lists } } }).to_string()
    }

    #[test]
    fn test_build_request_binds_user_name() {
        let body = build_request("kyrielight");
        assert_eq!(body["variables"]["userName"], "kyrielight");
        assert_eq!(body["query"], USER_ANIME_QUERY);
        assert!(USER_ANIME_QUERY.contains("type: ANIME"));
    }

    #[test]
    fn test_parse_response_partitions_by_list_name() {
        let body = response(json!([
            { "name": "Watching", "entries": [entry(1, "Kimi no Na wa."), entry(2, "Mushishi")] },
            { "name": "Completed", "entries": [entry(3, "Cowboy Bebop")] },
            { "name": "Paused", "entries": [entry(4, "Monster")] },
            { "name": "Planning", "entries": [entry(5, "Haikyuu!!")] },
        ]));

        let lists = parse_response(&body, &names()).unwrap();
        let ids = |category| lists.get(category).iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(ListCategory::Watching), vec![1, 2]);
        assert_eq!(ids(ListCategory::Paused), vec![4]);
        assert_eq!(ids(ListCategory::Planning), vec![5]);
        assert_eq!(lists.len(), 4);
    }

    #[test]
    fn test_list_names_match_case_insensitively() {
        let body = response(json!([
            { "name": "WATCHING", "entries": [entry(1, "A")] },
            { "name": "planning", "entries": [entry(2, "B")] },
        ]));

        let lists = parse_response(&body, &names()).unwrap();
        assert_eq!(lists.watching.len(), 1);
        assert!(lists.paused.is_empty());
        assert_eq!(lists.plan_to_watch.len(), 1);
    }

    #[test]
    fn test_unqueried_category_stays_empty() {
        let body = response(json!([
            { "name": "Completed", "entries": [entry(9, "Done")] },
        ]));

        let lists = parse_response(&body, &names()).unwrap();
        assert!(lists.is_empty());
    }

    #[test]
    fn test_duplicate_list_names_are_concatenated_in_order() {
        let body = response(json!([
            { "name": "Watching", "entries": [entry(1, "A")] },
            { "name": "Watching", "entries": [entry(2, "B")] },
        ]));

        let lists = parse_response(&body, &names()).unwrap();
        let ids: Vec<i64> = lists.watching.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_custom_list_names() {
        let names = ListNames {
            paused: "On Hold".to_string(),
            ..ListNames::default()
        };
        let body = response(json!([
            { "name": "On Hold", "entries": [entry(1, "A")] },
            { "name": "Paused", "entries": [entry(2, "B")] },
        ]));

        let lists = parse_response(&body, &names).unwrap();
        let ids: Vec<i64> = lists.paused.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = parse_response("<html>Bad Gateway</html>", &names());
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_missing_container_is_shape_error() {
        let body = json!({ "data": { "MediaListCollection": null } }).to_string();
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));

        let body = json!({ "data": null, "errors": [{ "message": "User not found", "status": 404 }] }).to_string();
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));

        let body = json!({ "data": { "MediaListCollection": { "lists": "nope" } } }).to_string();
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));
    }

    #[test]
    fn test_malformed_tracked_list_is_shape_error() {
        let body = response(json!([
            { "name": "Watching", "entries": [{ "media": { "title": { "romaji": "No id" } } }] },
        ]));
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));

        let body = response(json!([{ "name": "Paused", "entries": null }]));
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));
    }

    #[test]
    fn test_malformed_untracked_list_is_ignored() {
        let body = response(json!([
            { "name": "Completed", "entries": [{ "media": null }] },
            { "name": "Watching", "entries": [entry(1, "A")] },
        ]));

        let lists = parse_response(&body, &names()).unwrap();
        assert_eq!(lists.watching.len(), 1);
    }

    #[test]
    fn test_list_without_name_is_shape_error() {
        let body = response(json!([{ "entries": [] }]));
        assert!(matches!(parse_response(&body, &names()), Err(FetchError::Shape(_))));
    }
}

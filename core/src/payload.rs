//! Per-endpoint decoding of the non-paged legacy shapes.
//!
//! The backend is inconsistent from route to route: one list comes back as a
//! bare array, one as `{list, totalCount}` where only `list` matters, the menu
//! tree sometimes arrives wrapped in a second `data` object. Each endpoint
//! picks the one decoder matching its quirk.
//!
//! All decoders degrade to an empty collection on `null` or a mismatched
//! shape and log the fallback.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::pagination::{decode_list_payload, decode_records};

/// A tree that may or may not be wrapped in an extra `{data: ...}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaybeWrapped<T> {
    Bare(T),
    Wrapped { data: Option<T> },
}

/// Decode a payload that is expected to be a bare JSON array.
pub(crate) fn bare_list<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    if payload.is_null() {
        warn!(record = std::any::type_name::<T>(), "bare list payload is null");
        return Vec::new();
    }
    match serde_json::from_value::<Vec<Value>>(payload) {
        Ok(rows) => decode_records(rows),
        Err(err) => {
            warn!(
                record = std::any::type_name::<T>(),
                error = %err,
                "malformed bare list payload"
            );
            Vec::new()
        }
    }
}

/// Decode a `{list, totalCount}` payload keeping only `list`.
pub(crate) fn list_only<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    decode_list_payload::<T>(payload)
        .and_then(|legacy| legacy.list)
        .map(decode_records)
        .unwrap_or_default()
}

/// Decode a list that may be wrapped in `{data: [...]}`.
pub(crate) fn unwrap_data_list<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    if payload.is_null() {
        warn!(record = std::any::type_name::<T>(), "wrapped list payload is null");
        return Vec::new();
    }
    match serde_json::from_value::<MaybeWrapped<Vec<Value>>>(payload) {
        Ok(MaybeWrapped::Bare(rows)) => decode_records(rows),
        Ok(MaybeWrapped::Wrapped { data }) => data.map(decode_records).unwrap_or_default(),
        Err(err) => {
            warn!(
                record = std::any::type_name::<T>(),
                error = %err,
                "malformed wrapped list payload"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Node {
        id: i64,
        #[serde(default)]
        children: Vec<Node>,
    }

    fn node(id: i64) -> Node {
        Node { id, children: Vec::new() }
    }

    #[test]
    fn bare_list_decodes_array() {
        let items: Vec<Node> = bare_list(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(items, vec![node(1), node(2)]);
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::object(json!({"list": [{"id": 1}]}))]
    #[case::bad_item(json!([{"id": "x"}]))]
    fn bare_list_degrades_to_empty(#[case] payload: Value) {
        let items: Vec<Node> = bare_list(payload);
        assert!(items.is_empty());
    }

    #[test]
    fn bare_list_skips_only_the_bad_rows() {
        let items: Vec<Node> = bare_list(json!([{"id": 1}, {"id": "x"}, {"id": 3}]));
        assert_eq!(items, vec![node(1), node(3)]);
    }

    #[test]
    fn list_only_ignores_total() {
        let items: Vec<Node> = list_only(json!({"list": [{"id": 4}], "totalCount": 99}));
        assert_eq!(items, vec![node(4)]);
    }

    #[rstest]
    #[case::missing_list(json!({"totalCount": 1}))]
    #[case::null(json!(null))]
    #[case::bare_array(json!([{"id": 1}]))]
    fn list_only_degrades_to_empty(#[case] payload: Value) {
        let items: Vec<Node> = list_only(payload);
        assert!(items.is_empty());
    }

    #[test]
    fn unwrap_data_list_accepts_bare_tree() {
        let tree: Vec<Node> = unwrap_data_list(json!([{"id": 1, "children": [{"id": 2}]}]));
        assert_eq!(
            tree,
            vec![Node {
                id: 1,
                children: vec![node(2)],
            }]
        );
    }

    #[test]
    fn unwrap_data_list_accepts_wrapped_tree() {
        let tree: Vec<Node> = unwrap_data_list(json!({"data": [{"id": 1}, {"id": 3}]}));
        assert_eq!(tree, vec![node(1), node(3)]);
    }

    #[test]
    fn unwrap_data_list_skips_bad_top_level_rows() {
        let tree: Vec<Node> = unwrap_data_list(json!({"data": [{"id": 1}, {"name": "no id"}]}));
        assert_eq!(tree, vec![node(1)]);
    }

    #[test]
    fn unwrap_data_list_accepts_empty_array() {
        let tree: Vec<Node> = unwrap_data_list(json!([]));
        assert!(tree.is_empty());
    }

    #[rstest]
    #[case::null(json!(null))]
    #[case::null_data(json!({"data": null}))]
    #[case::no_data(json!({"other": 1}))]
    #[case::string(json!("oops"))]
    fn unwrap_data_list_degrades_to_empty(#[case] payload: Value) {
        let tree: Vec<Node> = unwrap_data_list(payload);
        assert!(tree.is_empty());
    }
}

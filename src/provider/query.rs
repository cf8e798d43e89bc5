//! Query-string construction for list-shaped operations.
//!
//! The dialect expects flattened filter fields first, then `sort`, `order`,
//! `offset`, and `limit`. Nested object filters become dotted-path keys
//! (`{"author": {"name": "x"}}` serializes as `author.name=x`), and array
//! values become repeated keys.

use serde_json::Value;

use crate::provider::params::{Pagination, Sort};
use crate::provider::record::RecordId;

/// Renders a scalar JSON value as a query-string value.
///
/// Strings render without JSON quoting; numbers and booleans render in
/// their literal form; null renders as the empty string.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Flattens a filter value into query pairs, using dotted-path keys for
/// nested objects and repeated keys for arrays.
///
/// Null and non-object top-level filters produce no pairs.
pub(crate) fn flatten_filter(filter: &Value, out: &mut Vec<(String, String)>) {
    if let Value::Object(map) = filter {
        for (key, value) in map {
            flatten_into(key.clone(), value, out);
        }
    }
}

fn flatten_into(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (child_key, child_value) in map {
                flatten_into(format!("{key}.{child_key}"), child_value, out);
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                out.push((key.clone(), scalar_to_string(entry)));
            }
        }
        scalar => out.push((key, scalar_to_string(scalar))),
    }
}

/// Builds the full query for a list-shaped request: flattened filter pairs
/// followed by `sort`, `order`, `offset`, and `limit`.
pub(crate) fn list_query(
    filter: &Value,
    sort: &Sort,
    pagination: &Pagination,
) -> Vec<(String, String)> {
    let mut query = Vec::new();
    flatten_filter(filter, &mut query);
    query.push(("sort".to_string(), sort.field.clone()));
    query.push(("order".to_string(), sort.order.to_string()));
    query.push(("offset".to_string(), pagination.offset().to_string()));
    query.push(("limit".to_string(), pagination.limit().to_string()));
    query
}

/// Builds the query for `get_many_reference`: the list query with one extra
/// filter pair `{target: id}` selecting records whose foreign key points at
/// the parent record.
pub(crate) fn reference_query(
    filter: &Value,
    target: &str,
    id: &RecordId,
    sort: &Sort,
    pagination: &Pagination,
) -> Vec<(String, String)> {
    let mut query = Vec::new();
    flatten_filter(filter, &mut query);
    query.push((target.to_string(), id.to_string()));
    query.push(("sort".to_string(), sort.field.clone()));
    query.push(("order".to_string(), sort.order.to_string()));
    query.push(("offset".to_string(), pagination.offset().to_string()));
    query.push(("limit".to_string(), pagination.limit().to_string()));
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::params::SortOrder;
    use serde_json::json;

    fn pairs(filter: &Value) -> Vec<(String, String)> {
        let mut out = Vec::new();
        flatten_filter(filter, &mut out);
        out
    }

    #[test]
    fn test_flatten_scalar_fields() {
        let out = pairs(&json!({"author": "jane", "published": true, "rating": 4}));
        assert!(out.contains(&("author".to_string(), "jane".to_string())));
        assert!(out.contains(&("published".to_string(), "true".to_string())));
        assert!(out.contains(&("rating".to_string(), "4".to_string())));
    }

    #[test]
    fn test_flatten_nested_object_uses_dotted_path() {
        let out = pairs(&json!({"author": {"name": "jane", "address": {"city": "Lyon"}}}));
        assert!(out.contains(&("author.name".to_string(), "jane".to_string())));
        assert!(out.contains(&("author.address.city".to_string(), "Lyon".to_string())));
    }

    #[test]
    fn test_flatten_array_repeats_key() {
        let out = pairs(&json!({"id": [1, 2, 3]}));
        assert_eq!(
            out,
            vec![
                ("id".to_string(), "1".to_string()),
                ("id".to_string(), "2".to_string()),
                ("id".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_null_filter_is_empty() {
        assert!(pairs(&json!(null)).is_empty());
        assert!(pairs(&json!({})).is_empty());
    }

    #[test]
    fn test_strings_render_without_quotes() {
        let out = pairs(&json!({"title": "hello world"}));
        assert_eq!(out, vec![("title".to_string(), "hello world".to_string())]);
    }

    #[test]
    fn test_list_query_order_and_values() {
        let query = list_query(
            &json!({"author": "jane"}),
            &Sort::new("title", SortOrder::Desc),
            &Pagination::new(3, 10),
        );

        assert_eq!(
            query,
            vec![
                ("author".to_string(), "jane".to_string()),
                ("sort".to_string(), "title".to_string()),
                ("order".to_string(), "DESC".to_string()),
                ("offset".to_string(), "20".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_reference_query_injects_target_pair() {
        let query = reference_query(
            &json!({"published": true}),
            "post_id",
            &RecordId::from(42),
            &Sort::new("created_at", SortOrder::Desc),
            &Pagination::new(1, 25),
        );

        assert_eq!(
            query,
            vec![
                ("published".to_string(), "true".to_string()),
                ("post_id".to_string(), "42".to_string()),
                ("sort".to_string(), "created_at".to_string()),
                ("order".to_string(), "DESC".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_query_offset_formula() {
        for (page, per_page, offset) in [(1, 25, "0"), (2, 25, "25"), (5, 7, "28")] {
            let query = list_query(&json!({}), &Sort::default(), &Pagination::new(page, per_page));
            let found = query
                .iter()
                .find(|(k, _)| k == "offset")
                .map(|(_, v)| v.as_str());
            assert_eq!(found, Some(offset));
        }
    }
}

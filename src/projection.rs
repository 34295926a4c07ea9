//! Field projection for tabular output.
//!
//! Turns sequences of arbitrary serializable API entities into uniform
//! key/value rows, given a caller-chosen list of (possibly nested) field
//! paths. Nested fields are addressed with dotted paths (i.e. `address.city`).

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Error types that can occur while projecting entities into rows
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A requested field path could not be resolved on an item
    #[error("cannot resolve field '{path}': no attribute '{segment}'")]
    UnresolvedField { path: String, segment: String },
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A single display-ready row: ordered column name to value pairs.
///
/// Column order is the order in which the columns were requested, not the
/// native attribute order of the source entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new(columns: Vec<(String, Value)>) -> Row {
        Row { columns }
    }

    pub fn columns(&self) -> &[(String, Value)] {
        &self.columns
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render a cell value for console output. Strings lose their JSON
    /// quoting, nulls render empty and compound values render as JSON.
    pub fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, value) in &self.columns {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Pluck `keys` from `items`. Nested keys can be specified by concatenating
/// with `.` (i.e. `key1.key2`).
///
/// Returns one row per item, in item order, with one column per key, in key
/// order. Resolution is strict: the first key segment that does not exist on
/// an item aborts the whole projection with
/// [`ProjectionError::UnresolvedField`].
pub fn pluck<T: Serialize>(keys: &[String], items: &[T]) -> Result<Vec<Row>, ProjectionError> {
    pluck_with(keys, items, ".", |k| k.to_string())
}

/// Variant of [`pluck`] with a custom path separator and key transform.
///
/// `key_fn` maps each requested field path to the column name used in the
/// output row (the default in [`pluck`] is the path itself).
pub fn pluck_with<T, F>(
    keys: &[String],
    items: &[T],
    key_sep: &str,
    key_fn: F,
) -> Result<Vec<Row>, ProjectionError>
where
    T: Serialize,
    F: Fn(&str) -> String,
{
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let value = serde_json::to_value(item)?;
        let mut columns = Vec::with_capacity(keys.len());
        for key in keys {
            columns.push((key_fn(key), resolve_path(&value, key, key_sep)?.clone()));
        }
        rows.push(Row::new(columns));
    }
    Ok(rows)
}

/// Walk one dotted path through a serialized entity, left to right.
fn resolve_path<'a>(
    root: &'a Value,
    path: &str,
    key_sep: &str,
) -> Result<&'a Value, ProjectionError> {
    let mut current = root;
    for segment in path.split(key_sep) {
        current = current
            .get(segment)
            .ok_or_else(|| ProjectionError::UnresolvedField {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
    }
    Ok(current)
}

/// Restrict `items` to `keys` (when given) and decide the effective sort key.
///
/// A sort key that is not among the projected keys is cleared rather than
/// treated as an error: the display no longer contains that column.
pub fn project_for_display<'a, T: Serialize>(
    items: &[T],
    keys: Option<&[String]>,
    sort_by: Option<&'a str>,
) -> Result<(Vec<Row>, Option<&'a str>), ProjectionError> {
    match keys {
        Some(keys) => {
            let rows = pluck(keys, items)?;
            let sort_by = sort_by.filter(|s| keys.iter().any(|k| k == s));
            Ok((rows, sort_by))
        }
        None => {
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                rows.push(native_row(serde_json::to_value(item)?));
            }
            Ok((rows, sort_by))
        }
    }
}

/// Row over an entity's own attributes, used when no field list was given.
fn native_row(value: Value) -> Row {
    match value {
        Value::Object(map) => Row::new(map.into_iter().collect()),
        other => Row::new(vec![("value".to_string(), other)]),
    }
}

/// Print `items` as a table, optionally restricted to `keys` and sorted by
/// `sort_by`, followed by a `Count:` line when `count` is set.
///
/// The count line is printed even when there are no items; the table itself
/// is suppressed for an empty sequence.
pub fn print_table<T: Serialize>(
    items: &[T],
    keys: Option<&[String]>,
    sort_by: Option<&str>,
    count: bool,
) -> Result<(), ProjectionError> {
    let (rows, sort_by) = project_for_display(items, keys, sort_by)?;
    if !rows.is_empty() {
        println!("{}", crate::format::to_table(&rows, sort_by));
    }
    if count {
        println!("Count: {}", rows.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Address {
        city: String,
        state: String,
    }

    #[derive(Serialize)]
    struct Company {
        name: String,
        address: Address,
    }

    fn acme() -> Company {
        Company {
            name: "Acme".to_string(),
            address: Address {
                city: "Austin".to_string(),
                state: "TX".to_string(),
            },
        }
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn plucks_top_level_and_nested_fields() {
        let rows = pluck(&keys(&["name", "address.city"]), &[acme()]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&json!("Acme")));
        assert_eq!(rows[0].get("address.city"), Some(&json!("Austin")));
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            vec!["name", "address.city"]
        );
    }

    #[test]
    fn row_count_matches_item_count_and_key_set_is_uniform() {
        let items = vec![acme(), acme(), acme()];
        let fields = keys(&["address.state", "name"]);
        let rows = pluck(&fields, &items).unwrap();
        assert_eq!(rows.len(), items.len());
        for row in &rows {
            assert_eq!(
                row.keys().collect::<Vec<_>>(),
                vec!["address.state", "name"]
            );
        }
    }

    #[test]
    fn empty_items_yield_empty_result() {
        let items: Vec<Company> = Vec::new();
        let rows = pluck(&keys(&["name"]), &items).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_keys_yield_empty_rows() {
        let rows = pluck(&[], &[acme()]).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
    }

    #[test]
    fn missing_field_fails_the_whole_projection() {
        let err = pluck(&keys(&["name", "address.zip"]), &[acme()]).unwrap_err();
        match err {
            ProjectionError::UnresolvedField { path, segment } => {
                assert_eq!(path, "address.zip");
                assert_eq!(segment, "zip");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_intermediate_segment_is_reported() {
        let err = pluck(&keys(&["location.city"]), &[acme()]).unwrap_err();
        match err {
            ProjectionError::UnresolvedField { segment, .. } => {
                assert_eq!(segment, "location")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn key_fn_renames_output_columns() {
        let rows = pluck_with(&keys(&["address.city"]), &[acme()], ".", |k| {
            k.rsplit('.').next().unwrap().to_string()
        })
        .unwrap();
        assert_eq!(rows[0].get("city"), Some(&json!("Austin")));
        assert_eq!(rows[0].get("address.city"), None);
    }

    #[test]
    fn custom_separator_is_honored() {
        let rows = pluck_with(&keys(&["address/city"]), &[acme()], "/", |k| {
            k.to_string()
        })
        .unwrap();
        assert_eq!(rows[0].get("address/city"), Some(&json!("Austin")));
    }

    #[test]
    fn sort_key_outside_field_list_is_cleared() {
        let fields = keys(&["name", "address.city"]);
        let (_, sort) = project_for_display(&[acme()], Some(&fields), Some("zip")).unwrap();
        assert_eq!(sort, None);
    }

    #[test]
    fn sort_key_inside_field_list_is_kept() {
        let fields = keys(&["name", "address.city"]);
        let (_, sort) = project_for_display(&[acme()], Some(&fields), Some("name")).unwrap();
        assert_eq!(sort, Some("name"));
    }

    #[test]
    fn unprojected_rows_use_native_attributes() {
        let (rows, sort) = project_for_display(&[acme()], None, Some("name")).unwrap();
        assert_eq!(sort, Some("name"));
        assert!(rows[0].get("name").is_some());
        assert!(rows[0].get("address").is_some());
    }

    #[test]
    fn rows_serialize_as_ordered_maps() {
        let rows = pluck(&keys(&["name", "address.city"]), &[acme()]).unwrap();
        let out = serde_json::to_string(&rows[0]).unwrap();
        assert_eq!(out, r#"{"name":"Acme","address.city":"Austin"}"#);
    }

    #[test]
    fn cell_text_renders_scalars_plainly() {
        assert_eq!(Row::cell_text(&json!("abc")), "abc");
        assert_eq!(Row::cell_text(&json!(42)), "42");
        assert_eq!(Row::cell_text(&Value::Null), "");
        assert_eq!(Row::cell_text(&json!({"a": 1})), r#"{"a":1}"#);
    }
}

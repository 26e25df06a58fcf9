//! Reads JSON Lines input into memory.
//!
//! Every record is kept, along with the set of field names seen across all of
//! them. Field names are remembered in the order they were first encountered,
//! which is the order later used for columns the caller did not place
//! explicitly.

use std::collections::HashSet;
use std::io::BufRead;

use serde_json::{Map, Value};

use crate::error::{ConvertError, Result};

/// One parsed input line.
pub type Record = Map<String, Value>;

/// Union of field names across all records, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyUniverse {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl KeyUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` unless already present. Returns true if it was new.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_owned());
        self.keys.push(key.to_owned());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeyUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut universe = KeyUniverse::new();
        for key in iter {
            universe.insert(key.as_ref());
        }
        universe
    }
}

/// Result of the collect pass.
#[derive(Debug, Default)]
pub struct Collection {
    pub records: Vec<Record>,
    pub keys: KeyUniverse,
}

/// Parses every non-blank line of `reader` as a JSON object.
///
/// With `limit` set, reading stops once that many records have been parsed;
/// lines past the cap are never read. A line that is not valid JSON, or is
/// JSON but not an object, aborts the whole collection.
pub fn collect_records<R: BufRead>(reader: R, limit: Option<usize>) -> Result<Collection> {
    let mut collection = Collection::default();

    let mut lines = reader.lines().enumerate();

    // The cap is checked before pulling the next line off the reader.
    while !limit.is_some_and(|max| collection.records.len() >= max) {
        let Some((idx, line)) = lines.next() else {
            break;
        };

        let line_no = idx + 1;
        let line = line.map_err(|source| ConvertError::Read {
            line: line_no,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(&line).map_err(|source| {
            ConvertError::MalformedRecord {
                line: line_no,
                source,
            }
        })?;

        let record = match value {
            Value::Object(map) => map,
            other => {
                return Err(ConvertError::NotAnObject {
                    line: line_no,
                    found: kind_of(&other),
                });
            }
        };

        for key in record.keys() {
            collection.keys.insert(key);
        }
        collection.records.push(record);
    }

    tracing::debug!(
        records = collection.records.len(),
        keys = collection.keys.len(),
        "collected input records"
    );
    Ok(collection)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str, limit: Option<usize>) -> Result<Collection> {
        collect_records(Cursor::new(input), limit)
    }

    #[test]
    fn test_collects_union_of_keys_in_first_seen_order() {
        let input = "{\"a\": 1, \"b\": 2}\n{\"a\": 3, \"c\": 4}\n{\"b\": 5}\n";
        let collection = collect(input, None).unwrap();

        assert_eq!(collection.records.len(), 3);
        assert_eq!(collection.keys.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_keeps_source_key_order_within_record() {
        let collection = collect("{\"zeta\": 1, \"alpha\": 2}\n", None).unwrap();
        assert_eq!(
            collection.keys.iter().collect::<Vec<_>>(),
            ["zeta", "alpha"]
        );
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        let collection = collect("", None).unwrap();
        assert!(collection.records.is_empty());
        assert!(collection.keys.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let collection = collect("\n{\"a\": 1}\n   \n{\"a\": 2}\n\n", None).unwrap();
        assert_eq!(collection.records.len(), 2);
    }

    #[test]
    fn test_limit_caps_record_count() {
        let input = "{\"a\": 1}\n{\"b\": 2}\n{\"c\": 3}\n";

        let capped = collect(input, Some(2)).unwrap();
        assert_eq!(capped.records.len(), 2);
        assert!(!capped.keys.contains("c"));

        let zero = collect(input, Some(0)).unwrap();
        assert!(zero.records.is_empty());

        let generous = collect(input, Some(10)).unwrap();
        assert_eq!(generous.records.len(), 3);
    }

    #[test]
    fn test_lines_past_the_cap_are_not_parsed() {
        let input = "{\"a\": 1}\nnot json at all\n";
        let collection = collect(input, Some(1)).unwrap();
        assert_eq!(collection.records.len(), 1);
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let err = collect("{\"a\": 1}\n{\"a\": \n", None).unwrap_err();
        match err {
            ConvertError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_line_is_fatal() {
        let err = collect("[1, 2, 3]\n", None).unwrap_err();
        match err {
            ConvertError::NotAnObject { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, "array");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_absent_key_differs_from_null() {
        let collection = collect("{\"a\": null}\n", None).unwrap();
        let record = &collection.records[0];
        assert_eq!(record.get("a"), Some(&Value::Null));
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn test_key_universe_deduplicates() {
        let universe: KeyUniverse = ["a", "b", "a", "c", "b"].into_iter().collect();
        assert_eq!(universe.len(), 3);
        assert_eq!(universe.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}

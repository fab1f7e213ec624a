//! The document store holding the state records.
//!
//! Records are schemaless JSON objects keyed by a `uuid` attribute. The
//! evaluator only depends on the [`StateStore`] trait (one field-predicate
//! lookup), so it can run against the shipped in-memory store or a test
//! double. [`MemoryStore`] loads a JSON array of records, either from the
//! seed dataset compiled into the binary or from a file on disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::ast::{Field, Op};
use crate::value::Value;

/// One state record: an opaque field-name to value mapping.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The result of one field-predicate lookup, keyed by record uuid.
pub type ResultSet = HashMap<String, Record>;

/// Errors raised by store construction or lookup.
#[derive(Debug)]
pub enum StoreError {
    /// Reading the dataset file failed
    Io(io::Error),
    /// The dataset is not valid JSON
    Json(serde_json::Error),
    /// The dataset is not an array of record objects
    NotACollection,
    /// A record without a string `uuid` attribute
    MissingUuid,
    /// A lookup failed at the store layer
    Lookup(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "could not read the record store: {}", e),
            StoreError::Json(e) => write!(f, "record store is not valid JSON: {}", e),
            StoreError::NotACollection => {
                write!(f, "record store must be a JSON array of record objects")
            }
            StoreError::MissingUuid => {
                write!(f, "record store contains a record without a 'uuid' attribute")
            }
            StoreError::Lookup(msg) => write!(f, "lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// A queryable collection of state records.
pub trait StateStore {
    /// Return every record whose `field` attribute satisfies `op value`.
    ///
    /// Records that lack the attribute entirely never match, for any
    /// operator; `state_bird != 'hermit thrush'` only returns states that
    /// have a bird on record.
    fn find(&self, field: Field, op: Op, value: &Value) -> Result<ResultSet, StoreError>;
}

/// The shipped store: all records held in memory, keyed by uuid.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: HashMap<String, Record>,
}

impl MemoryStore {
    /// The seed dataset compiled into the binary: all fifty states.
    pub const SEED_DATA: &'static str = include_str!("../data/us_states.json");

    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded seed dataset.
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_json_str(Self::SEED_DATA)
    }

    /// Load a store from a JSON array of record objects.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records = parse_collection(json)?;
        let mut store = Self::new();
        for record in records {
            store.upsert(record)?;
        }
        Ok(store)
    }

    /// Load a store from a dataset file on disk.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Insert or replace one record, keyed by its `uuid` attribute.
    pub fn upsert(&mut self, record: Record) -> Result<(), StoreError> {
        let uuid = record
            .get("uuid")
            .and_then(|v| v.as_str())
            .ok_or(StoreError::MissingUuid)?
            .to_string();
        self.docs.insert(uuid, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Serialize the collection back to a JSON array, ordered by state name
    /// so that rewrites of the dataset file diff cleanly.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        let mut records: Vec<&Record> = self.docs.values().collect();
        records.sort_by_key(|r| r.get("state").and_then(|v| v.as_str()).unwrap_or(""));
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

impl StateStore for MemoryStore {
    fn find(&self, field: Field, op: Op, value: &Value) -> Result<ResultSet, StoreError> {
        let mut matches = ResultSet::new();
        for (uuid, record) in &self.docs {
            let Some(attr) = record.get(field.keyword()) else {
                continue;
            };
            if attr_matches(attr, op, value) {
                matches.insert(uuid.clone(), record.clone());
            }
        }
        Ok(matches)
    }
}

/// Compare one stored attribute against a query value.
///
/// Type-mismatched pairs (a string attribute against an integer value, or
/// the reverse) never match; the grammar makes them unreachable for records
/// that follow the dataset schema.
fn attr_matches(attr: &serde_json::Value, op: Op, value: &Value) -> bool {
    match value {
        Value::Integer(n) => attr.as_i64().is_some_and(|a| op.compare_int(a, *n)),
        Value::Text(s) => attr.as_str().is_some_and(|a| op.compare_str(a, s)),
    }
}

pub(crate) fn parse_collection(json: &str) -> Result<Vec<Record>, StoreError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = parsed else {
        return Err(StoreError::NotACollection);
    };
    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::Object(record) => Ok(record),
            _ => Err(StoreError::NotACollection),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryStore {
        MemoryStore::from_json_str(
            r#"[
                {"uuid": "a", "state": "Vermont", "region": "Northeast",
                 "population": 643077, "num_counties": 14,
                 "state_bird": "Hermit Thrush"},
                {"uuid": "b", "state": "Texas", "region": "Southwest",
                 "population": 29145505, "num_counties": 254,
                 "popular_food": "Brisket"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn find_by_string_equality() {
        let store = sample();
        let result = store
            .find(Field::Region, Op::Eq, &Value::Text("Northeast".to_string()))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.contains_key("a"));
    }

    #[test]
    fn find_by_numeric_ordering() {
        let store = sample();
        let result = store
            .find(Field::Population, Op::Gt, &Value::Integer(1_000_000))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.contains_key("b"));
    }

    #[test]
    fn absent_attribute_never_matches() {
        let store = sample();
        // Texas has no state_bird on record, so != excludes it too.
        let result = store
            .find(
                Field::StateBird,
                Op::Ne,
                &Value::Text("Hermit Thrush".to_string()),
            )
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn upsert_replaces_by_uuid() {
        let mut store = sample();
        let mut record = Record::new();
        record.insert("uuid".to_string(), "a".into());
        record.insert("state".to_string(), "Vermont".into());
        record.insert("population".to_string(), 650_000.into());
        store.upsert(record).unwrap();
        assert_eq!(store.len(), 2);

        let result = store
            .find(Field::Population, Op::Eq, &Value::Integer(650_000))
            .unwrap();
        assert!(result.contains_key("a"));
    }

    #[test]
    fn record_without_uuid_is_rejected() {
        let err = MemoryStore::from_json_str(r#"[{"state": "Nowhere"}]"#);
        assert!(matches!(err, Err(StoreError::MissingUuid)));
    }
}

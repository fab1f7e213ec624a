//! One-shot dataset import.
//!
//! Reads a JSON array of record objects and upserts each into a store file
//! keyed by its `uuid`, replacing records with the same key and keeping the
//! rest. Run independently of a query session, never during one.

use std::fs;
use std::path::Path;

use super::CliError;
use crate::store::{parse_collection, MemoryStore};

/// What an import did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records read from the source file
    pub imported: usize,
    /// Records in the store after the merge
    pub total: usize,
}

/// Merge the records in `source` into the store file at `store_path`.
///
/// A missing store file starts from an empty collection. The merged
/// collection is written back in full.
pub fn import_dataset(source: &Path, store_path: &Path) -> Result<ImportSummary, CliError> {
    let mut store = if store_path.exists() {
        MemoryStore::from_path(store_path)?
    } else {
        MemoryStore::new()
    };

    let records = parse_collection(&fs::read_to_string(source)?)?;
    let imported = records.len();
    for record in records {
        store.upsert(record)?;
    }

    fs::write(store_path, store.to_json_pretty()?)?;
    Ok(ImportSummary {
        imported,
        total: store.len(),
    })
}

//! The record store.
//!
//! Owns the ordered in-memory record list and its backing file. The whole
//! store is loaded at open and flushed at [`Store::publish`]; there is no
//! partial or streaming access. Single process, single thread: the store
//! assumes one interactive user per machine, and concurrent writers are out
//! of scope (last publish wins).

pub mod alloc;
pub mod codec;
pub mod error;
pub mod record;
pub mod search;

pub use error::StoreError;
pub use record::{CONCEPT, PURGATORY, Record, RecordBody};
pub use search::SearchHit;

use std::fs;
use std::path::{Path, PathBuf};

/// The in-memory record list plus its backing path.
///
/// Initialization is construction: [`Store::open`] always reads the backing
/// file into a fresh value, so there is no separate initialize step whose
/// second call could misbehave. Re-opening re-loads from disk.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Record>,
}

impl Store {
    /// Open the store at `path`, creating the parent directory if absent
    /// (idempotent) and loading the file if it exists. A missing file is an
    /// empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::storage(dir, e))?;
        }
        let records = codec::load(&path)?;
        Ok(Store { path, records })
    }

    /// Append a record.
    ///
    /// No uniqueness check happens here: the allocator is the sole writer of
    /// new identifiers and is trusted to supply one not already present.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// First record whose identifier equals `id`, if any. An empty store is
    /// just a miss, never an error.
    pub fn select(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace the record carrying `id` with `body`, preserving the
    /// identifier. Full replace, not a patch: fields not supplied are gone.
    /// The replacement is appended, so the record moves to the end of the
    /// list. Fails with [`StoreError::NotFound`], leaving the store
    /// untouched, if no record carries `id`.
    pub fn update(&mut self, id: u32, body: RecordBody) -> Result<(), StoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(pos);
        self.records.push(Record { id, body });
        Ok(())
    }

    /// Park the record's identifier in purgatory for later reclamation.
    pub fn retire(&mut self, id: u32) -> Result<(), StoreError> {
        self.update(id, RecordBody::Purgatory)
    }

    /// Rank all records against `keywords`; see [`search::rank`].
    pub fn search<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<SearchHit<'_>> {
        search::rank(&self.records, keywords)
    }

    /// Flush the full record list to the backing file (all-or-nothing).
    pub fn publish(&self) -> Result<(), StoreError> {
        codec::save(&self.path, &self.records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("data").join("inventory.tsv")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let (dir, store) = open_temp();
        assert!(dir.path().join("data").is_dir());
        assert!(store.is_empty());
        // idempotent: opening again is fine
        let again = Store::open(store.path()).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_select_finds_first_match() {
        let (_dir, mut store) = open_temp();
        store.add(Record::concept(5));
        assert_eq!(store.select(5).unwrap().id, 5);
        assert!(store.select(6).is_none());
    }

    #[test]
    fn test_update_is_full_replace_and_moves_to_end() {
        let (_dir, mut store) = open_temp();
        store.add(Record::item(3, "Old Loc", "5", vec![]));
        store.add(Record::concept(4));

        store
            .update(
                3,
                RecordBody::Item {
                    location: "Shelf A".into(),
                    quantity: "12".into(),
                    properties: vec!["blue".into()],
                },
            )
            .unwrap();

        assert_eq!(store.len(), 2);
        let last = store.records().last().unwrap();
        assert_eq!(last.id, 3);
        assert_eq!(
            last.to_fields(),
            vec!["3", "Shelf A", "12", "blue"] // old fields gone
        );
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let (_dir, mut store) = open_temp();
        store.add(Record::concept(1));
        let before = store.records().to_vec();
        match store.update(2, RecordBody::Purgatory) {
            Err(StoreError::NotFound(2)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_retire_parks_in_purgatory() {
        let (_dir, mut store) = open_temp();
        store.add(Record::item(8, "garage", "1", vec![]));
        store.retire(8).unwrap();
        assert!(store.select(8).unwrap().is_purgatory());
    }

    #[test]
    fn test_publish_then_reopen() {
        let (_dir, mut store) = open_temp();
        store.add(Record::item(0, "garage", "2", vec!["red".into()]));
        store.add(Record::purgatory(1));
        store.publish().unwrap();

        let reopened = Store::open(store.path()).unwrap();
        assert_eq!(reopened.records(), store.records());
    }
}

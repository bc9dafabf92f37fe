//! Identifier allocation.
//!
//! Identifiers are a scarce, monotonically-growing 32-bit namespace with
//! explicit reclamation: retired records parked in purgatory free their
//! identifier for reuse before the namespace is extended, which bounds
//! growth under repeated retire/reissue cycles.

use crate::store::Store;
use crate::store::error::StoreError;
use crate::store::record::{PURGATORY, Record, RecordBody};

impl Store {
    /// Issue a fresh identifier.
    ///
    /// Reclaims the purgatory record with the greatest identifier if one
    /// exists, flipping it to a concept in place; otherwise appends a new
    /// concept record at `max + 1` (`0` for an empty store). Running off the
    /// end of the 32-bit namespace is an error, never a silent wrap.
    pub fn allocate(&mut self) -> Result<u32, StoreError> {
        let reclaimed = self
            .search(&[PURGATORY])
            .into_iter()
            .filter(|hit| hit.record.is_purgatory())
            .map(|hit| hit.record.id)
            .max();

        if let Some(id) = reclaimed {
            for record in self.records_mut() {
                if record.id == id {
                    record.body = RecordBody::Concept;
                    break;
                }
            }
            return Ok(id);
        }

        let id = match self.records().iter().map(|r| r.id).max() {
            Some(u32::MAX) => return Err(StoreError::IdSpaceExhausted),
            Some(max) => max + 1,
            None => 0,
        };
        self.add(Record::concept(id));
        Ok(id)
    }
}

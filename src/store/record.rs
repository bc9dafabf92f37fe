//! The record model.
//!
//! On disk a record is a flat list of text fields: field 0 is the identifier
//! (decimal), field 1 is either a status sentinel or a location, and items
//! continue with a quantity and free-form properties. In memory that implicit
//! positional schema becomes a tagged variant keyed by the sentinel, so the
//! rest of the crate never indexes raw field positions.
//!
//! Status and location share field 1 deliberately: a record is never both
//! "in purgatory" and located somewhere.

use crate::store::error::StoreError;
use std::cmp::Ordering;

/// Sentinel for an identifier that has been issued (e.g. printed on a label)
/// but does not yet back a physical item.
pub const CONCEPT: &str = "__concept__";

/// Sentinel for a retired identifier held for reclamation.
pub const PURGATORY: &str = "__purgatory__";

/// One record of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub body: RecordBody,
}

/// The three record shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Identifier issued, no item yet.
    Concept,
    /// Identifier retired, available for reuse.
    Purgatory,
    /// An active inventory entry. Property insertion order is preserved and
    /// meaningful for display; there is no uniqueness constraint on them.
    Item {
        location: String,
        quantity: String,
        properties: Vec<String>,
    },
}

impl Record {
    pub fn concept(id: u32) -> Self {
        Record { id, body: RecordBody::Concept }
    }

    pub fn purgatory(id: u32) -> Self {
        Record { id, body: RecordBody::Purgatory }
    }

    pub fn item(
        id: u32,
        location: impl Into<String>,
        quantity: impl Into<String>,
        properties: Vec<String>,
    ) -> Self {
        Record {
            id,
            body: RecordBody::Item {
                location: location.into(),
                quantity: quantity.into(),
                properties,
            },
        }
    }

    pub fn is_purgatory(&self) -> bool {
        matches!(self.body, RecordBody::Purgatory)
    }

    /// The record's text fields in on-disk order, identifier excluded.
    ///
    /// This is the surface the search ranker matches keywords against. The
    /// identifier is numeric and never equals a keyword, so it stays out.
    pub fn text_fields(&self) -> Vec<&str> {
        match &self.body {
            RecordBody::Concept => vec![CONCEPT],
            RecordBody::Purgatory => vec![PURGATORY],
            RecordBody::Item { location, quantity, properties } => {
                let mut fields = Vec::with_capacity(2 + properties.len());
                fields.push(location.as_str());
                fields.push(quantity.as_str());
                fields.extend(properties.iter().map(String::as_str));
                fields
            }
        }
    }

    /// Flatten to the codec's field list (identifier first, as decimal text).
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = vec![self.id.to_string()];
        fields.extend(self.text_fields().into_iter().map(str::to_string));
        fields
    }

    /// Rebuild a record from a decoded field list.
    ///
    /// `record_no` is the 1-based position in the file, used for error
    /// reporting only. Shape violations are decode errors, never silently
    /// patched up.
    pub fn from_fields(record_no: usize, fields: Vec<String>) -> Result<Self, StoreError> {
        if fields.len() < 2 {
            return Err(StoreError::decode(
                record_no,
                format!("expected at least 2 fields, got {}", fields.len()),
            ));
        }

        let id: u32 = fields[0].parse().map_err(|_| {
            StoreError::decode(record_no, format!("identifier field {:?} is not a u32", fields[0]))
        })?;

        let body = if fields[1] == CONCEPT || fields[1] == PURGATORY {
            if fields.len() != 2 {
                return Err(StoreError::decode(
                    record_no,
                    format!("status record carries {} extra fields", fields.len() - 2),
                ));
            }
            if fields[1] == CONCEPT { RecordBody::Concept } else { RecordBody::Purgatory }
        } else {
            if fields.len() < 3 {
                return Err(StoreError::decode(
                    record_no,
                    "item record is missing its quantity field",
                ));
            }
            let mut rest = fields.into_iter().skip(1);
            let location = rest.next().unwrap_or_default();
            let quantity = rest.next().unwrap_or_default();
            RecordBody::Item { location, quantity, properties: rest.collect() }
        };

        Ok(Record { id, body })
    }

    /// Compare two records by their full field tuple, identifier first.
    ///
    /// The ranker falls back to this after match count and original index;
    /// identifiers are unique so it can never actually decide an ordering,
    /// but the full tuple is part of the frozen ranking contract and is
    /// implemented to the letter.
    pub fn field_cmp(&self, other: &Record) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.text_fields().cmp(&other.text_fields()))
    }
}

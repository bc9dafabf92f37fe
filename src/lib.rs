//! # Tally - Personal Inventory Tracker
//!
//! Tally tracks physical inventory by assigning every item a unique 32-bit
//! identifier, printing identifiers on adhesive label sheets, and recording
//! free-form location/quantity/property metadata in a small persistent
//! record store.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`store`] - The record store: in-memory record list, keyword-ranked
//!   search, identifier allocation/reclamation, and the tab-delimited
//!   backing-file codec
//! - [`ident`] - The `xx-xx-xx-xx` identifier text format
//! - [`sheet`] - Printable label-sheet generation (SVG)
//! - [`output`] - Terminal rendering of records
//! - [`app_data`] - User-scoped data directory and configuration
//!
//! ## Quick Start
//!
//! ```ignore
//! use tally::store::{RecordBody, Store};
//!
//! let mut store = Store::open("/path/to/inventory.tsv")?;
//! let id = store.allocate()?;
//! store.update(id, RecordBody::Item {
//!     location: "garage".into(),
//!     quantity: "2".into(),
//!     properties: vec!["red".into(), "bolt".into()],
//! })?;
//! store.publish()?;
//! ```
//!
//! ## Identifier lifecycle
//!
//! Identifiers move through three states: *concept* (issued, e.g. printed on
//! a label, but not yet backing an item), *item* (an active inventory entry)
//! and *purgatory* (retired, parked for reclamation). The allocator reuses
//! purgatory identifiers before growing the namespace, so the 32-bit space
//! stays bounded under repeated retire/reissue cycles.

pub mod app_data;
pub mod ident;
pub mod output;
pub mod sheet;
pub mod store;

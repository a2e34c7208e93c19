//! CSV export for Roster.
//!
//! Converts a snapshot of [`roster_core`] records into RFC 4180 CSV. Pure
//! synchronous; no HTTP or storage dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use roster_core::record::Record;
//!
//! let records: Vec<Record> = Vec::new();
//! let csv = roster_csv::serialize(&records);
//! assert!(csv.starts_with("id,lastName,"));
//! ```

pub mod error;
mod serialize;

pub use error::{Error, Result};
pub use serialize::{serialize, write};

/// MIME type of the produced document.
pub const CONTENT_TYPE: &str = "text/csv; charset=utf-8";

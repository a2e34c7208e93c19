//! Core types and trait definitions for the Roster record store.
//!
//! This crate is deliberately free of HTTP and storage dependencies. It owns
//! the record model, the write-path validator, the pure query helpers and the
//! [`store::RecordStore`] abstraction that backends implement.

pub mod error;
pub mod query;
pub mod record;
pub mod stats;
pub mod store;
pub mod validate;

pub use error::{Error, Result};

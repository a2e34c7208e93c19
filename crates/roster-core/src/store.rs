//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-memory`).
//! Higher layers (`roster-api`, `roster-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  Result,
  query::SearchQuery,
  record::Record,
  stats::Statistics,
  validate::RawFieldSet,
};

/// Abstraction over a Roster record store backend.
///
/// Every call is one transaction: a mutation either applies completely or
/// not at all, and a read observes the collection either before or after any
/// concurrent mutation, never in between. Reads return owned snapshots.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every record in store (insertion) order.
  fn list(&self) -> impl Future<Output = Result<Vec<Record>>> + Send + '_;

  /// The record with `id`, or [`crate::Error::NotFound`].
  fn get(&self, id: u64) -> impl Future<Output = Result<Record>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate `fields`, assign the next identifier and append the record.
  ///
  /// Identifiers are strictly increasing and never reused, even after
  /// deletions.
  fn create(
    &self,
    fields: RawFieldSet,
  ) -> impl Future<Output = Result<Record>> + Send + '_;

  /// Validate `fields` and replace every attribute of record `id` except the
  /// identifier. The record keeps its position.
  fn update(
    &self,
    id: u64,
    fields: RawFieldSet,
  ) -> impl Future<Output = Result<Record>> + Send + '_;

  /// Remove record `id` and return it.
  fn delete(&self, id: u64) -> impl Future<Output = Result<Record>> + Send + '_;

  // ── Derived queries ───────────────────────────────────────────────────

  /// Records matching `query`; see [`SearchQuery`].
  fn search<'a>(
    &'a self,
    query: &'a SearchQuery,
  ) -> impl Future<Output = Result<Vec<Record>>> + Send + 'a;

  /// The window `[skip, skip + limit)` of [`RecordStore::list`].
  fn paginate(
    &self,
    skip: i64,
    limit: i64,
  ) -> impl Future<Output = Result<Vec<Record>>> + Send + '_;

  /// The full collection serialized as UTF-8 CSV with a header row.
  ///
  /// Failures are reported as [`crate::Error::Export`] and leave the store
  /// untouched.
  fn export(&self) -> impl Future<Output = Result<Vec<u8>>> + Send + '_;

  /// Count and age summary of the collection as of the current year.
  fn statistics(&self) -> impl Future<Output = Result<Statistics>> + Send + '_;
}

//! [`MemoryStore`] — the in-memory implementation of [`RecordStore`].

use std::sync::Arc;

use chrono::{Datelike as _, Utc};
use tokio::sync::RwLock;

use roster_core::{
  Error, Result,
  query::{self, SearchQuery},
  record::Record,
  stats::Statistics,
  store::RecordStore,
  validate::{RawFieldSet, validate},
};

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Inner {
  /// Insertion order; deletions never reorder the remainder.
  records: Vec<Record>,
  /// Highest identifier ever handed out. Only grows.
  last_id: u64,
}

impl Inner {
  fn position(&self, id: u64) -> Result<usize> {
    self
      .records
      .iter()
      .position(|r| r.id == id)
      .ok_or(Error::NotFound(id))
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster record store held entirely in process memory.
///
/// Cloning is cheap — clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  async fn snapshot(&self) -> Vec<Record> {
    self.inner.read().await.records.clone()
  }

  /// [`RecordStore::statistics`] with an explicit reference year.
  pub async fn statistics_as_of(&self, year: i32) -> Statistics {
    let guard = self.inner.read().await;
    Statistics::compute(&guard.records, year)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for MemoryStore {
  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list(&self) -> Result<Vec<Record>> { Ok(self.snapshot().await) }

  async fn get(&self, id: u64) -> Result<Record> {
    let guard = self.inner.read().await;
    let idx = guard.position(id)?;
    Ok(guard.records[idx].clone())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn create(&self, fields: RawFieldSet) -> Result<Record> {
    let payload = validate(&fields)?;

    let mut guard = self.inner.write().await;
    guard.last_id += 1;
    let record = payload.into_record(guard.last_id);
    guard.records.push(record.clone());

    tracing::debug!(id = record.id, total = guard.records.len(), "record created");
    Ok(record)
  }

  async fn update(&self, id: u64, fields: RawFieldSet) -> Result<Record> {
    let payload = validate(&fields)?;

    let mut guard = self.inner.write().await;
    let idx = guard.position(id)?;
    let record = &mut guard.records[idx];
    record.apply(payload);

    tracing::debug!(id, "record updated");
    Ok(record.clone())
  }

  async fn delete(&self, id: u64) -> Result<Record> {
    let mut guard = self.inner.write().await;
    let idx = guard.position(id)?;
    let removed = guard.records.remove(idx);

    tracing::debug!(id, total = guard.records.len(), "record deleted");
    Ok(removed)
  }

  // ── Derived queries ───────────────────────────────────────────────────────

  async fn search(&self, query: &SearchQuery) -> Result<Vec<Record>> {
    let guard = self.inner.read().await;
    query.apply(&guard.records)
  }

  async fn paginate(&self, skip: i64, limit: i64) -> Result<Vec<Record>> {
    let guard = self.inner.read().await;
    query::paginate(&guard.records, skip, limit)
  }

  async fn export(&self) -> Result<Vec<u8>> {
    // Serialise outside the lock; the snapshot is ours.
    let records = self.snapshot().await;
    let mut buf = Vec::new();
    roster_csv::write(&mut buf, &records).map_err(|e| {
      tracing::error!(error = %e, "csv export failed");
      Error::Export(e.to_string())
    })?;
    Ok(buf)
  }

  async fn statistics(&self) -> Result<Statistics> {
    Ok(self.statistics_as_of(Utc::now().year()).await)
  }
}

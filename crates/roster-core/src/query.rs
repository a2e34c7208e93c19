//! Pure read-side helpers shared by store backends: search filtering and
//! pagination over a snapshot of records.

use serde::Deserialize;

use crate::{Error, Result, record::Record};

// ─── Search ──────────────────────────────────────────────────────────────────

/// Parameters for [`crate::store::RecordStore::search`].
///
/// Both filters are case-insensitive substring matches; when both are set a
/// record must satisfy both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
  /// Matched against `firstName` only.
  pub name:  Option<String>,
  /// Matched against `email`.
  pub email: Option<String>,
}

impl SearchQuery {
  fn needles(&self) -> Result<(Option<String>, Option<String>)> {
    let norm = |s: &Option<String>| {
      s.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase)
    };
    match (norm(&self.name), norm(&self.email)) {
      (None, None) => Err(Error::MissingParameter(
        "at least one of `name` or `email` is required".to_owned(),
      )),
      needles => Ok(needles),
    }
  }

  /// Filter `records`, preserving their order.
  ///
  /// An empty match is an empty vector, not an error.
  pub fn apply(&self, records: &[Record]) -> Result<Vec<Record>> {
    let (name, email) = self.needles()?;
    Ok(
      records
        .iter()
        .filter(|r| {
          name
            .as_deref()
            .is_none_or(|n| r.first_name.to_lowercase().contains(n))
            && email
              .as_deref()
              .is_none_or(|e| r.email.to_lowercase().contains(e))
        })
        .cloned()
        .collect(),
    )
  }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Return the window `[skip, skip + limit)` of `records`.
///
/// `skip` must be non-negative and `limit` at least one. A `skip` beyond the
/// end yields an empty page.
pub fn paginate(records: &[Record], skip: i64, limit: i64) -> Result<Vec<Record>> {
  let skip = usize::try_from(skip).map_err(|_| {
    Error::InvalidParameter(format!("skip must be >= 0, got {skip}"))
  })?;
  let limit = usize::try_from(limit)
    .ok()
    .filter(|l| *l >= 1)
    .ok_or_else(|| {
      Error::InvalidParameter(format!("limit must be >= 1, got {limit}"))
    })?;

  Ok(records.iter().skip(skip).take(limit).cloned().collect())
}

//! Aggregate statistics over the record collection.

use chrono::Datelike as _;
use serde::Serialize;

use crate::{record::Record, validate::parse_birth_day};

/// Summary returned by [`crate::store::RecordStore::statistics`].
///
/// Ages are computed as `current_year - birth_year` and are not adjusted for
/// whether the birthday has already occurred this year, so a person whose
/// birthday is still ahead is reported one year older than they are.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
  pub total:   usize,
  /// `0.0` when no record has a usable birth date.
  pub avg_age: f64,
  pub min_age: Option<i32>,
  pub max_age: Option<i32>,
}

impl Statistics {
  /// Compute statistics for `records` as seen in `current_year`.
  ///
  /// Records whose birth date no longer parses are counted in `total` but
  /// skipped from the age aggregate.
  pub fn compute(records: &[Record], current_year: i32) -> Self {
    let ages: Vec<i32> = records
      .iter()
      .filter_map(|r| match parse_birth_day(&r.birth_day) {
        Ok(date) => Some(current_year - date.year()),
        Err(kind) => {
          tracing::warn!(
            id = r.id,
            birth_day = %r.birth_day,
            "skipping record in age statistics: {kind}"
          );
          None
        }
      })
      .collect();

    let avg_age = if ages.is_empty() {
      0.0
    } else {
      ages.iter().map(|a| f64::from(*a)).sum::<f64>() / ages.len() as f64
    };

    Self {
      total: records.len(),
      avg_age,
      min_age: ages.iter().copied().min(),
      max_age: ages.iter().copied().max(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn born(id: u64, birth_day: &str) -> Record {
    Record {
      id,
      last_name: "Doe".into(),
      first_name: "Jo".into(),
      middle_name: "Ray".into(),
      birth_day: birth_day.into(),
      email: "jo@doe.com".into(),
      phone: String::new(),
    }
  }

  #[test]
  fn empty_collection() {
    let stats = Statistics::compute(&[], 2024);
    assert_eq!(stats, Statistics {
      total:   0,
      avg_age: 0.0,
      min_age: None,
      max_age: None,
    });
  }

  #[test]
  fn ages_by_year_subtraction() {
    let records = [born(1, "01/01/2000"), born(2, "01/01/1990")];
    let stats = Statistics::compute(&records, 2024);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.avg_age, 29.0);
    assert_eq!(stats.min_age, Some(24));
    assert_eq!(stats.max_age, Some(34));
  }

  #[test]
  fn birthday_later_in_year_is_not_adjusted() {
    let stats = Statistics::compute(&[born(1, "31/12/2000")], 2024);
    assert_eq!(stats.min_age, Some(24));
  }

  #[test]
  fn unparseable_birth_days_are_skipped_from_ages_only() {
    let records = [born(1, "garbage"), born(2, "01/01/2004")];
    let stats = Statistics::compute(&records, 2024);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.avg_age, 20.0);
    assert_eq!(stats.min_age, Some(20));
    assert_eq!(stats.max_age, Some(20));
  }

  #[test]
  fn serializes_with_camel_case_and_nulls() {
    let json = serde_json::to_value(Statistics::compute(&[], 2024)).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "total": 0, "avgAge": 0.0, "minAge": null, "maxAge": null })
    );
  }
}

//! Record — the single entity held by the store.

use serde::{Deserialize, Serialize};

// ─── Field names ─────────────────────────────────────────────────────────────

/// The six caller-supplied attributes of a record, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  LastName,
  FirstName,
  MiddleName,
  BirthDay,
  Email,
  Phone,
}

impl Field {
  pub const ALL: [Field; 6] = [
    Field::LastName,
    Field::FirstName,
    Field::MiddleName,
    Field::BirthDay,
    Field::Email,
    Field::Phone,
  ];

  /// The wire name of the field, as accepted in a raw field set.
  pub fn name(self) -> &'static str {
    match self {
      Self::LastName => "lastName",
      Self::FirstName => "firstName",
      Self::MiddleName => "middleName",
      Self::BirthDay => "birthDay",
      Self::Email => "email",
      Self::Phone => "phone",
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|f| f.name() == name)
  }

  /// Inclusive character-count bounds, for the name fields only.
  pub fn length_bounds(self) -> Option<(usize, usize)> {
    match self {
      Self::LastName | Self::FirstName => Some((2, 25)),
      Self::MiddleName => Some((3, 25)),
      _ => None,
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A validated person entry. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
  pub id:          u64,
  pub last_name:   String,
  pub first_name:  String,
  pub middle_name: String,
  /// `DD/MM/YYYY`, kept verbatim.
  pub birth_day:   String,
  pub email:       String,
  /// Free-form; not validated beyond presence.
  pub phone:       String,
}

impl Record {
  /// Column names in export order.
  pub const COLUMNS: [&'static str; 7] = [
    "id",
    "lastName",
    "firstName",
    "middleName",
    "birthDay",
    "email",
    "phone",
  ];

  /// Replace every field except `id`.
  pub fn apply(&mut self, payload: NewRecord) {
    self.last_name = payload.last_name;
    self.first_name = payload.first_name;
    self.middle_name = payload.middle_name;
    self.birth_day = payload.birth_day;
    self.email = payload.email;
    self.phone = payload.phone;
  }
}

// ─── NewRecord ───────────────────────────────────────────────────────────────

/// A validated payload without an identifier. Only produced by
/// [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
  pub last_name:   String,
  pub first_name:  String,
  pub middle_name: String,
  pub birth_day:   String,
  pub email:       String,
  pub phone:       String,
}

impl NewRecord {
  pub fn into_record(self, id: u64) -> Record {
    Record {
      id,
      last_name: self.last_name,
      first_name: self.first_name,
      middle_name: self.middle_name,
      birth_day: self.birth_day,
      email: self.email,
      phone: self.phone,
    }
  }
}

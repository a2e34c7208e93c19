//! Write-path validation.
//!
//! A raw field set is checked in three stages, each of which stops validation
//! when it produces violations:
//!
//! 1. every key must be one of the six [`Field`] names;
//! 2. every field must be present;
//! 3. every value must be text satisfying its field's rule (lengths, date,
//!    email). All violations of this stage are reported together.
//!
//! Values are never trimmed or re-cased.

use std::{fmt, sync::LazyLock};

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::record::{Field, NewRecord};

/// The unvalidated input of a create or update: field name to value.
pub type RawFieldSet = serde_json::Map<String, Value>;

static BIRTH_DAY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?\.)+[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?$",
  )
  .expect("valid regex")
});

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

// ─── Violations ──────────────────────────────────────────────────────────────

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
  UnknownField,
  MissingField,
  NotText,
  Length { min: usize, max: usize, actual: usize },
  BadDateFormat,
  InvalidDate,
  InvalidEmail,
}

impl fmt::Display for ViolationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownField => write!(f, "unknown field"),
      Self::MissingField => write!(f, "field required"),
      Self::NotText => write!(f, "value must be a string"),
      Self::Length { min, max, actual } => write!(
        f,
        "length must be between {min} and {max} characters, got {actual}"
      ),
      Self::BadDateFormat => {
        write!(f, "birth date must be in the format DD/MM/YYYY")
      }
      Self::InvalidDate => {
        write!(f, "invalid date, make sure the date exists")
      }
      Self::InvalidEmail => write!(f, "value is not a valid email address"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub field: String,
  #[serde(flatten)]
  pub kind:  ViolationKind,
}

impl Violation {
  fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
    Self { field: field.into(), kind }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.kind)
  }
}

/// A rejected field set. Always holds at least one violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
  violations: Vec<Violation>,
}

impl ValidationError {
  fn new(violations: Vec<Violation>) -> Self {
    debug_assert!(!violations.is_empty());
    Self { violations }
  }

  pub fn violations(&self) -> &[Violation] { &self.violations }

  /// The field names involved, in report order.
  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.violations.iter().map(|v| v.field.as_str())
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, v) in self.violations.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{v}")?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationError {}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Check `fields` and produce the normalized payload.
pub fn validate(fields: &RawFieldSet) -> Result<NewRecord, ValidationError> {
  let unknown: Vec<Violation> = fields
    .keys()
    .filter(|k| Field::from_name(k).is_none())
    .map(|k| Violation::new(k.as_str(), ViolationKind::UnknownField))
    .collect();
  if !unknown.is_empty() {
    return Err(ValidationError::new(unknown));
  }

  let missing: Vec<Violation> = Field::ALL
    .into_iter()
    .filter(|f| !fields.contains_key(f.name()))
    .map(|f| Violation::new(f.name(), ViolationKind::MissingField))
    .collect();
  if !missing.is_empty() {
    return Err(ValidationError::new(missing));
  }

  let mut violations = Vec::new();
  let values = Field::ALL.map(|field| {
    let Some(Value::String(value)) = fields.get(field.name()) else {
      violations.push(Violation::new(field.name(), ViolationKind::NotText));
      return None;
    };
    if let Some(kind) = check_field(field, value) {
      violations.push(Violation::new(field.name(), kind));
    }
    Some(value.as_str())
  });
  if !violations.is_empty() {
    return Err(ValidationError::new(violations));
  }

  let [last_name, first_name, middle_name, birth_day, email, phone] =
    values.map(|v| v.unwrap_or_default().to_owned());
  Ok(NewRecord {
    last_name,
    first_name,
    middle_name,
    birth_day,
    email,
    phone,
  })
}

fn check_field(field: Field, value: &str) -> Option<ViolationKind> {
  match field {
    Field::LastName | Field::FirstName | Field::MiddleName => {
      let (min, max) = field.length_bounds()?;
      let actual = value.chars().count();
      (actual < min || actual > max)
        .then_some(ViolationKind::Length { min, max, actual })
    }
    Field::BirthDay => parse_birth_day(value).err(),
    Field::Email => {
      (!is_valid_email(value)).then_some(ViolationKind::InvalidEmail)
    }
    Field::Phone => None,
  }
}

// ─── Field rules ─────────────────────────────────────────────────────────────

/// Parse a strict `DD/MM/YYYY` birth date into a calendar date.
pub fn parse_birth_day(value: &str) -> Result<NaiveDate, ViolationKind> {
  if !BIRTH_DAY.is_match(value) {
    return Err(ViolationKind::BadDateFormat);
  }
  // `%Y` accepts year 0; a birth date never has it.
  NaiveDate::parse_from_str(value, "%d/%m/%Y")
    .ok()
    .filter(|d| d.year() >= 1)
    .ok_or(ViolationKind::InvalidDate)
}

/// `local@domain` with a dot-atom local part and a dotted domain of
/// alphanumeric/hyphen labels. Letters and digits may be any script; the
/// top-level label must not be all digits.
pub fn is_valid_email(value: &str) -> bool {
  if value.chars().count() > MAX_EMAIL_LEN || !EMAIL.is_match(value) {
    return false;
  }
  let Some((local, domain)) = value.split_once('@') else {
    return false;
  };
  let numeric_tld = domain
    .rsplit('.')
    .next()
    .is_some_and(|tld| tld.chars().all(|c| c.is_numeric()));
  local.chars().count() <= MAX_LOCAL_PART_LEN && !numeric_tld
}

// ─── Tests ───────────────────────────────────────────────────────────────────

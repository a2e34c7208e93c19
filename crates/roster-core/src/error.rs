//! Error types for `roster-core`.

use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(#[from] ValidationError),

  #[error("record not found: {0}")]
  NotFound(u64),

  #[error("missing parameter: {0}")]
  MissingParameter(String),

  #[error("invalid parameter: {0}")]
  InvalidParameter(String),

  #[error("export failed: {0}")]
  Export(String),
}

impl Error {
  /// Stable, machine-readable name for the error category.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Validation(_) => "validation",
      Self::NotFound(_) => "not_found",
      Self::MissingParameter(_) => "missing_parameter",
      Self::InvalidParameter(_) => "invalid_parameter",
      Self::Export(_) => "export",
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

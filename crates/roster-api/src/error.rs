//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use roster_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request could not be decoded: malformed JSON, a non-object body, or
  /// a path or query value of the wrong type.
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Core(CoreError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
      ApiError::Core(CoreError::MissingParameter(_) | CoreError::InvalidParameter(_)) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::Core(CoreError::Export(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn kind(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => "bad_request",
      ApiError::Core(err) => err.kind(),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let kind = self.kind();

    if status.is_server_error() {
      tracing::error!(kind, "{self}");
    } else {
      tracing::warn!(kind, "{self}");
    }

    let mut body = json!({ "error": kind, "message": self.to_string() });
    if let ApiError::Core(CoreError::Validation(v)) = &self {
      body["violations"] = json!(v.violations());
    }
    (status, Json(body)).into_response()
  }
}

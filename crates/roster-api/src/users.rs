//! Handlers for the `/users` CRUD endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/users`       | Every record in store order |
//! | `GET`    | `/users/:id`   | 404 if not found |
//! | `POST`   | `/users`       | Body: the six record fields; returns 201 |
//! | `POST`   | `/create/user` | Same as `POST /users` |
//! | `PUT`    | `/users/:id`   | Body: the six record fields |
//! | `DELETE` | `/users/:id`   | 404 if not found |

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use roster_core::{record::Record, store::RecordStore, validate::RawFieldSet};
use serde::Serialize;

use crate::{
  AppState,
  error::ApiError,
  extract::{Json, Path},
};

/// Acknowledgement body returned by the write endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
  pub success: bool,
  pub message: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user:    Option<Record>,
}

impl Ack {
  fn with(message: &'static str, user: Record) -> Self {
    Self { success: true, message, user: Some(user) }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Record>>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(state.store.list().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<u64>,
) -> Result<Json<Record>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(state.store.get(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users` — returns 201 + [`Ack`] carrying the stored record.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(fields): Json<RawFieldSet>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + 'static,
{
  let user = state.store.create(fields).await?;
  tracing::info!(id = user.id, "user created");
  Ok((StatusCode::CREATED, Json(Ack::with("User added successfully", user))))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /users/:id` — replaces every field except the identifier.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<u64>,
  Json(fields): Json<RawFieldSet>,
) -> Result<Json<Ack>, ApiError>
where
  S: RecordStore + 'static,
{
  let user = state.store.update(id, fields).await?;
  tracing::info!(id, "user updated");
  Ok(Json(Ack::with("User updated successfully", user)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/:id`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<u64>,
) -> Result<Json<Ack>, ApiError>
where
  S: RecordStore + 'static,
{
  state.store.delete(id).await?;
  tracing::info!(id, "user deleted");
  Ok(Json(Ack {
    success: true,
    message: "User deleted successfully",
    user:    None,
  }))
}

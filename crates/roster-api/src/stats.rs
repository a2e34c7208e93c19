//! Handler for `GET /users/statistics`.

use axum::extract::State;
use roster_core::{stats::Statistics, store::RecordStore};

use crate::{AppState, error::ApiError, extract::Json};

/// `GET /users/statistics` — `{total, avgAge, minAge, maxAge}`.
///
/// Ages are whole-year differences between the current year and the birth
/// year; see [`Statistics`].
pub async fn handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Statistics>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(state.store.statistics().await?))
}

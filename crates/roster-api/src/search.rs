//! Handlers for `GET /users/search` and `GET /users/page`.

use axum::extract::State;
use roster_core::{query::SearchQuery, record::Record, store::RecordStore};
use serde::Deserialize;

use crate::{
  AppState,
  error::ApiError,
  extract::{Json, Query},
};

/// `GET /users/search[?name=...][&email=...]`
///
/// At least one parameter must be non-empty. No match is an empty array.
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Record>>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(state.store.search(&query).await?))
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
  #[serde(default)]
  pub skip:  i64,
  #[serde(default = "default_limit")]
  pub limit: i64,
}

fn default_limit() -> i64 { 10 }

/// `GET /users/page[?skip=...][&limit=...]` — defaults `skip=0`, `limit=10`.
pub async fn page<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Json<Vec<Record>>, ApiError>
where
  S: RecordStore + 'static,
{
  Ok(Json(state.store.paginate(params.skip, params.limit).await?))
}

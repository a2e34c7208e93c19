//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::store::RecordStore`].
//! TLS and listener concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = roster_api::api_router(AppState::new(store));
//! ```

pub mod error;
pub mod export;
pub mod extract;
pub mod search;
pub mod stats;
pub mod users;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::store::RecordStore;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:      Arc<S>,
  /// When set, every export is also written into this directory.
  pub export_dir: Option<Arc<PathBuf>>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      export_dir: self.export_dir.clone(),
    }
  }
}

impl<S> AppState<S> {
  pub fn new(store: S) -> Self {
    Self { store: Arc::new(store), export_dir: None }
  }

  pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.export_dir = Some(Arc::new(dir.into()));
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// Every request is logged through [`TraceLayer`] with its method, URI,
/// status and latency.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route("/create/user", post(users::create::<S>))
    .route("/users/search", get(search::handler::<S>))
    .route("/users/page", get(search::page::<S>))
    .route("/users/export", get(export::handler::<S>))
    .route("/users/statistics", get(stats::handler::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>)
        .put(users::update::<S>)
        .delete(users::delete::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! Handler for `GET /users/export`.
//!
//! Streams the CSV export as an attachment. When the router was built with an
//! export directory, the same bytes are also written to
//! `<dir>/users-<UTC timestamp>.csv` before responding.

use std::{io, path::Path};

use axum::{
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use chrono::Utc;
use roster_core::{Error, store::RecordStore};
use tokio::{fs::OpenOptions, io::AsyncWriteExt as _};

use crate::{AppState, error::ApiError};

const ATTACHMENT: &str = "attachment; filename=\"users.csv\"";

/// How many suffixed names are tried when a timestamp is already taken.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// `GET /users/export`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
) -> Result<Response, ApiError>
where
  S: RecordStore + 'static,
{
  let csv = state.store.export().await?;

  if let Some(dir) = state.export_dir.as_deref() {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string();
    write_to_dir(dir, &stamp, &csv).await?;
  }

  Ok(
    (
      [
        (header::CONTENT_TYPE, roster_csv::CONTENT_TYPE),
        (header::CONTENT_DISPOSITION, ATTACHMENT),
      ],
      csv,
    )
      .into_response(),
  )
}

/// Write `csv` to a new file in `dir`. Existing files are never overwritten:
/// a taken name gets a `-1`, `-2`, ... suffix.
async fn write_to_dir(dir: &Path, stamp: &str, csv: &[u8]) -> Result<(), Error> {
  for attempt in 0..MAX_NAME_ATTEMPTS {
    let name = match attempt {
      0 => format!("users-{stamp}.csv"),
      n => format!("users-{stamp}-{n}.csv"),
    };
    let path = dir.join(name);
    let export_err =
      |e: io::Error| Error::Export(format!("failed to write {}: {e}", path.display()));

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
      Ok(file) => file,
      Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
      Err(e) => return Err(export_err(e)),
    };
    file.write_all(csv).await.map_err(export_err)?;
    file.flush().await.map_err(export_err)?;

    tracing::info!(path = %path.display(), bytes = csv.len(), "export written");
    return Ok(());
  }

  Err(Error::Export(format!(
    "no free export file name for users-{stamp} in {}",
    dir.display()
  )))
}

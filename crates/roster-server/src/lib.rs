//! Configuration for the Roster server binary.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Environment variables with this prefix override file settings, e.g.
/// `ROSTER_PORT=8080`.
pub const ENV_PREFIX: &str = "ROSTER";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  /// `0` lets the operating system pick a free port.
  #[serde(default)]
  pub port:       u16,
  /// Directory that receives a copy of every CSV export.
  #[serde(default)]
  pub export_dir: Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

impl Default for ServerConfig {
  fn default() -> Self {
    Self { host: default_host(), port: 0, export_dir: None }
  }
}

impl ServerConfig {
  /// Load from the TOML file at `path` (optional) layered under
  /// `ROSTER_*` environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.export_dir, None);
  }

  #[test]
  fn file_values_are_read() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "host = \"0.0.0.0\"\nport = 8123\nexport_dir = \"/tmp/exports\"")
      .unwrap();

    let cfg = ServerConfig::load(file.path()).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.export_dir, Some(PathBuf::from("/tmp/exports")));
    assert_eq!(cfg.address(), "0.0.0.0:8123");
  }

  #[test]
  fn malformed_file_is_an_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();
    assert!(ServerConfig::load(file.path()).is_err());
  }
}

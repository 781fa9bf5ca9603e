//! Runtime settings, layered from `hanzi.toml` and `HANZI_*` environment
//! variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Paths used by every command. Any field missing from the config file and
/// environment falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub database_path:  PathBuf,
  pub source_path:    PathBuf,
  pub reference_path: PathBuf,
  pub snapshot_dir:   PathBuf,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      database_path:  "hanzi.db".into(),
      source_path:    "data/dictionary.txt".into(),
      reference_path: "data/hsk_reference.json".into(),
      snapshot_dir:   "backups".into(),
    }
  }
}

impl Settings {
  /// Read `path` (if it exists) and overlay `HANZI_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("HANZI"))
      .build()
      .context("failed to read config file")?;

    let settings: Self = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;

    Ok(Self {
      database_path:  expand_tilde(&settings.database_path),
      source_path:    expand_tilde(&settings.source_path),
      reference_path: expand_tilde(&settings.reference_path),
      snapshot_dir:   expand_tilde(&settings.snapshot_dir),
    })
  }
}

/// A path given on the command line, expanded, or else the configured one.
pub fn flag_or(flag: Option<PathBuf>, configured: &Path) -> PathBuf {
  flag
    .map(|path| expand_tilde(&path))
    .unwrap_or_else(|| configured.to_path_buf())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/") {
    if let Ok(home) = std::env::var("HOME") {
      return PathBuf::from(home).join(rest);
    }
  }
  path.to_path_buf()
}

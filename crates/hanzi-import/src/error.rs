//! Error types for the import pipeline.
//!
//! Every variant is fatal to the run: nothing is committed once one of these
//! is returned.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot open dictionary source {path:?}: {source}")]
  SourceOpen {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("failed reading dictionary source at line {line}: {source}")]
  SourceRead {
    line:   usize,
    source: std::io::Error,
  },

  #[error("malformed record at line {line}: {source}")]
  Parse {
    line:   usize,
    source: serde_json::Error,
  },

  /// The line is not valid UTF-8; a decode failure like [`Error::Parse`].
  #[error("malformed record at line {line}: {source}")]
  Encoding {
    line:   usize,
    source: std::str::Utf8Error,
  },

  #[error("invalid record at line {line}: {source}")]
  Validation {
    line:   usize,
    source: hanzi_core::Error,
  },

  #[error("cannot read reference table {path:?}: {source}")]
  ReferenceRead {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("malformed reference table: {0}")]
  ReferenceParse(#[source] serde_json::Error),

  #[error("load failed, table unchanged: {0}")]
  Load(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

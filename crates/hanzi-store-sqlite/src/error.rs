//! Error type for `hanzi-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Two rows in one batch carried the same character.
  #[error("duplicate character {0:?} in batch")]
  DuplicateCharacter(String),

  /// A row broke some other column constraint.
  #[error("row for {character:?} violates a constraint: {message}")]
  ConstraintViolation { character: String, message: String },

  #[error("snapshot target already exists: {0:?}")]
  SnapshotExists(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for `hanzi-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A decoded dictionary record has no usable `character` value.
  #[error("record is missing the required `character` field")]
  MissingCharacter,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

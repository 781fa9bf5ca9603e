//! The `CharacterStore` trait.
//!
//! Implemented by storage backends (e.g. `hanzi-store-sqlite`). The import
//! pipeline and the decomposition resolver depend on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::record::{CharacterRecord, NewCharacter};

/// Abstraction over a committed character table.
///
/// Reads may run concurrently with each other. `replace_all` must not run
/// concurrently with anything against the same table; callers serialise
/// imports.
pub trait CharacterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the committed row for `character`. `None` if absent.
  fn lookup<'a>(
    &'a self,
    character: &'a str,
  ) -> impl Future<Output = Result<Option<CharacterRecord>, Self::Error>> + Send + 'a;

  /// Replace the entire table with `rows` in a single transaction.
  ///
  /// The table is reset (dropped and recreated) and every row inserted. On
  /// any constraint violation or storage error nothing changes and the
  /// previous content stays visible. Returns the number of rows committed.
  fn replace_all(
    &self,
    rows: Vec<NewCharacter>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Number of committed rows.
  fn count(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

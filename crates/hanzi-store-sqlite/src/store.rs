//! [`SqliteStore`], the SQLite implementation of [`CharacterStore`].

use std::path::{Path, PathBuf};

use hanzi_core::{
  record::{CharacterRecord, NewCharacter},
  store::CharacterStore,
};
use rusqlite::{OpenFlags, OptionalExtension as _};

use crate::{
  Error, Result,
  encode::{INSERT, SELECT_BY_CHARACTER, Violation, constraint_violation, decode_record, insert_params},
  schema,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A character table backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and make sure the table exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an existing store without write access. Nothing is created; a
  /// database that was never imported into reports a missing table on
  /// lookup.
  pub async fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = tokio_rusqlite::Connection::open_with_flags(path, flags).await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        schema::init(conn)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Write a consistent copy of the whole database to `dest`.
  ///
  /// Uses `VACUUM INTO`, so it works on read-only connections and never
  /// observes a half-applied import. Refuses to overwrite an existing file.
  pub async fn snapshot(&self, dest: impl AsRef<Path>) -> Result<PathBuf> {
    let dest = dest.as_ref().to_path_buf();
    if dest.exists() {
      return Err(Error::SnapshotExists(dest));
    }

    let target = dest.to_string_lossy().into_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute("VACUUM INTO ?1", rusqlite::params![target])?;
        Ok(())
      })
      .await?;

    tracing::info!(dest = %dest.display(), "database snapshot written");
    Ok(dest)
  }
}

// ─── CharacterStore impl ─────────────────────────────────────────────────────

impl CharacterStore for SqliteStore {
  type Error = Error;

  async fn lookup<'a>(&'a self, character: &'a str) -> Result<Option<CharacterRecord>> {
    let character = character.to_owned();

    let record = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(SELECT_BY_CHARACTER, rusqlite::params![character], decode_record)
          .optional()?)
      })
      .await?;

    Ok(record)
  }

  async fn replace_all(&self, rows: Vec<NewCharacter>) -> Result<usize> {
    // The inner `Result` carries constraint rejections; returning it without
    // committing drops the transaction, which rolls back the reset as well.
    let outcome: Result<usize> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        schema::reset(&tx)?;

        {
          let mut stmt = tx.prepare(INSERT)?;
          for row in &rows {
            let Err(e) = stmt.execute(&insert_params(row)[..]) else {
              continue;
            };
            let character = row.character.clone();
            return match constraint_violation(&e) {
              Some(Violation::Unique) => Ok(Err(Error::DuplicateCharacter(character))),
              Some(Violation::Other) => Ok(Err(Error::ConstraintViolation {
                character,
                message: e.to_string(),
              })),
              None => Err(e.into()),
            };
          }
        }

        tx.commit()?;
        Ok(Ok(rows.len()))
      })
      .await?;

    let committed = outcome?;
    tracing::info!(committed, "character table replaced");
    Ok(committed)
  }

  async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM characters", [], |r| r.get(0))?))
      .await?;
    Ok(n as usize)
  }
}

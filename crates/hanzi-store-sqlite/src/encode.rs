//! Column lists and row mapping between [`CharacterRecord`] and the
//! `characters` table.
//!
//! Booleans are stored as `0`/`1` integers; every nullable field maps to SQL
//! `NULL`, never to an empty string.

use hanzi_core::record::{CharacterRecord, NewCharacter};
use rusqlite::{ErrorCode, Row, ToSql, ffi};

pub const SELECT_BY_CHARACTER: &str = "
SELECT id, character, definition, pinyin, radical, hsk_level, is_radical,
       script_type, stroke_count, decomposition, variants, radical_variants
FROM characters
WHERE character = ?1";

pub const INSERT: &str = "
INSERT INTO characters (
    character, definition, pinyin, radical, hsk_level, is_radical,
    script_type, stroke_count, decomposition, variants, radical_variants
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";

pub fn decode_record(row: &Row<'_>) -> rusqlite::Result<CharacterRecord> {
  Ok(CharacterRecord {
    id:               row.get(0)?,
    character:        row.get(1)?,
    definition:       row.get(2)?,
    pinyin:           row.get(3)?,
    radical:          row.get(4)?,
    hsk_level:        row.get(5)?,
    is_radical:       row.get(6)?,
    script_type:      row.get(7)?,
    stroke_count:     row.get(8)?,
    decomposition:    row.get(9)?,
    variants:         row.get(10)?,
    radical_variants: row.get(11)?,
  })
}

/// Positional parameters for [`INSERT`].
pub fn insert_params(row: &NewCharacter) -> [&dyn ToSql; 11] {
  [
    &row.character,
    &row.definition,
    &row.pinyin,
    &row.radical,
    &row.hsk_level,
    &row.is_radical,
    &row.script_type,
    &row.stroke_count,
    &row.decomposition,
    &row.variants,
    &row.radical_variants,
  ]
}

/// How an insert was rejected by a table constraint, if it was.
pub enum Violation {
  Unique,
  Other,
}

pub fn constraint_violation(err: &rusqlite::Error) -> Option<Violation> {
  match err {
    rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
      if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE {
        Some(Violation::Unique)
      } else {
        Some(Violation::Other)
      }
    }
    _ => None,
  }
}

//! SQL schema for the Hanzi SQLite store.
//!
//! [`init`] runs at connection startup and is idempotent. [`reset`] is the
//! destructive variant used at the start of every import; it runs inside the
//! import transaction, so a failed import rolls the drop back too.

use rusqlite::Connection;

/// Connection-level settings.
const PRAGMAS: &str = "PRAGMA journal_mode = WAL;";

/// One row per character. `id` is a surrogate key and is regenerated by every
/// import; `character` is the real identity.
const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS characters (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    character        TEXT    NOT NULL UNIQUE,
    definition       TEXT    NOT NULL DEFAULT '',
    pinyin           TEXT    NOT NULL DEFAULT '',
    radical          TEXT,
    hsk_level        INTEGER,
    is_radical       INTEGER NOT NULL DEFAULT 0 CHECK (is_radical IN (0, 1)),
    script_type      TEXT,                -- e.g. 'simplified' | 'traditional'
    stroke_count     INTEGER CHECK (stroke_count IS NULL OR stroke_count > 0),
    decomposition    TEXT,                -- IDS descriptor, e.g. '⿰女子'
    variants         TEXT,
    radical_variants TEXT
);

CREATE INDEX IF NOT EXISTS characters_hsk_idx     ON characters(hsk_level);
CREATE INDEX IF NOT EXISTS characters_radical_idx ON characters(radical);

PRAGMA user_version = 2;
";

const DROP_TABLE: &str = "DROP TABLE IF EXISTS characters;";

/// Create the table if this database has never been imported into.
pub fn init(conn: &Connection) -> rusqlite::Result<()> {
  conn.execute_batch(PRAGMAS)?;
  conn.execute_batch(CREATE_TABLE)
}

/// Drop and recreate the table, discarding every row and the id sequence.
pub fn reset(conn: &Connection) -> rusqlite::Result<()> {
  conn.execute_batch(DROP_TABLE)?;
  conn.execute_batch(CREATE_TABLE)
}

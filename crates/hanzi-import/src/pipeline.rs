//! The staged import: read → merge → normalise → buffer → one atomic write.
//!
//! The whole batch is held in memory before anything is written. That keeps
//! the store's replace all-or-nothing: a bad line anywhere in the source
//! aborts the run before the table is touched.

use std::{io::BufRead, path::Path};

use hanzi_core::{
  enrich::{merge, normalize},
  record::NewCharacter,
  reference::ReferenceTable,
  store::CharacterStore,
};
use tracing::{debug, info, warn};

use crate::{DictionaryReader, Error, Result, SourceLine, load_reference_table};

/// Emit a progress event every this many parsed lines.
const PROGRESS_INTERVAL: usize = 1_000;

/// Fully normalised rows for one run, plus how many of them matched a
/// reference entry.
#[derive(Debug, Clone, Default)]
pub struct Batch {
  pub rows:     Vec<NewCharacter>,
  pub enriched: usize,
}

/// Outcome of a committed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
  /// Rows now in the table.
  pub committed: usize,
  /// Committed rows that took metadata from the reference table.
  pub enriched:  usize,
}

/// Drain `reader`, merging and normalising every record.
///
/// Fails on the first read, parse or validation error; the partial batch is
/// discarded.
pub fn prepare_batch<R: BufRead>(
  reader:    DictionaryReader<R>,
  reference: &ReferenceTable,
) -> Result<Batch> {
  let mut batch = Batch::default();

  for item in reader {
    let SourceLine { line, entry } = item?;
    let enriched = merge(entry, reference);
    let has_reference = enriched.has_reference_data();
    let row = normalize(enriched).map_err(|source| Error::Validation { line, source })?;

    if has_reference {
      batch.enriched += 1;
    }
    batch.rows.push(row);

    if batch.rows.len() % PROGRESS_INTERVAL == 0 {
      debug!(parsed = batch.rows.len(), line, "parsing dictionary");
    }
  }

  Ok(batch)
}

/// Commit a prepared batch as a single replace of the store's table.
pub async fn import_batch<S: CharacterStore>(store: &S, batch: Batch) -> Result<ImportReport> {
  let Batch { rows, enriched } = batch;
  info!(rows = rows.len(), "inserting characters");

  let committed = store.replace_all(rows).await.map_err(|e| {
    warn!(error = %e, "import rejected; table left unchanged");
    Error::Load(Box::new(e))
  })?;

  Ok(ImportReport { committed, enriched })
}

/// Import the dictionary at `source`, enriched from the reference table at
/// `reference`, replacing everything in `store`.
///
/// Returns the number of rows committed, or an error after which the store
/// is exactly as it was before the call.
pub async fn run_import<S: CharacterStore>(
  store:     &S,
  source:    impl AsRef<Path>,
  reference: impl AsRef<Path>,
) -> Result<ImportReport> {
  let reference = load_reference_table(reference)?;
  info!(entries = reference.len(), "reference table loaded");

  let source = source.as_ref();
  info!(source = %source.display(), "parsing dictionary");
  let batch = prepare_batch(DictionaryReader::open(source)?, &reference)?;

  let report = import_batch(store, batch).await?;
  info!(
    committed = report.committed,
    enriched = report.enriched,
    "import complete"
  );
  Ok(report)
}

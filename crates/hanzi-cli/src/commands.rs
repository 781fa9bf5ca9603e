//! Command implementations. Each opens the store it needs, runs, and prints
//! its result to stdout.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Local;
use hanzi_core::{decomposition::resolve_decomposition, store::CharacterStore as _};
use hanzi_store_sqlite::SqliteStore;
use serde::Serialize;

use crate::settings::{Settings, expand_tilde, flag_or};

async fn open_read_only(path: &Path) -> anyhow::Result<SqliteStore> {
  SqliteStore::open_read_only(path)
    .await
    .with_context(|| format!("failed to open store at {path:?}"))
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Rebuild the character table from the dictionary and reference sources.
pub async fn import(
  settings:  &Settings,
  source:    Option<PathBuf>,
  reference: Option<PathBuf>,
) -> anyhow::Result<()> {
  let source = flag_or(source, &settings.source_path);
  let reference = flag_or(reference, &settings.reference_path);

  let store = SqliteStore::open(&settings.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.database_path))?;

  let report = hanzi_import::run_import(&store, &source, &reference)
    .await
    .with_context(|| format!("import from {source:?} failed"))?;

  println!(
    "Imported {} characters ({} enriched from reference table)",
    report.committed, report.enriched
  );
  Ok(())
}

/// Print the committed row for `character`.
pub async fn lookup(settings: &Settings, character: &str) -> anyhow::Result<()> {
  let store = open_read_only(&settings.database_path).await?;
  match store.lookup(character).await.context("lookup failed")? {
    Some(record) => print_json(&record),
    None => {
      println!("{character}: not found");
      Ok(())
    }
  }
}

/// Resolve the stored decomposition of a committed character, one level deep.
pub async fn decompose(settings: &Settings, character: &str) -> anyhow::Result<()> {
  let store = open_read_only(&settings.database_path).await?;
  let Some(record) = store.lookup(character).await.context("lookup failed")? else {
    println!("{character}: not found");
    return Ok(());
  };

  let components = resolve_decomposition(&store, record.decomposition.as_deref())
    .await
    .context("decomposition lookup failed")?;
  print_json(&components)
}

/// Resolve an arbitrary descriptor against the table.
pub async fn resolve(settings: &Settings, descriptor: &str) -> anyhow::Result<()> {
  let store = open_read_only(&settings.database_path).await?;
  let components = resolve_decomposition(&store, Some(descriptor))
    .await
    .context("decomposition lookup failed")?;
  print_json(&components)
}

/// Copy the database to `dest`, or to a timestamped file in the snapshot
/// directory.
pub async fn snapshot(settings: &Settings, dest: Option<PathBuf>) -> anyhow::Result<()> {
  let dest = match dest {
    Some(dest) => expand_tilde(&dest),
    None => {
      std::fs::create_dir_all(&settings.snapshot_dir)
        .with_context(|| format!("failed to create {:?}", settings.snapshot_dir))?;
      settings.snapshot_dir.join(snapshot_file_name(Local::now()))
    }
  };

  let store = open_read_only(&settings.database_path).await?;
  let written = store.snapshot(&dest).await.context("snapshot failed")?;
  println!("Snapshot written to {}", written.display());
  Ok(())
}

/// Report how many characters are committed.
pub async fn status(settings: &Settings) -> anyhow::Result<()> {
  let store = open_read_only(&settings.database_path).await?;
  let count = store.count().await.context("count failed")?;
  println!("{}: {count} characters", settings.database_path.display());
  Ok(())
}

fn snapshot_file_name(at: chrono::DateTime<Local>) -> String {
  format!("hanzi-{}.db", at.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone as _;

  use super::*;

  #[test]
  fn snapshot_names_are_timestamped() {
    let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(snapshot_file_name(at), "hanzi-20240309-070501.db");
  }
}

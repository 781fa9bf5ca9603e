//! Integration tests for `SqliteStore` against in-memory and file databases.

use hanzi_core::{
  decomposition::{Component, resolve_decomposition},
  record::NewCharacter,
  store::CharacterStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn row(character: &str) -> NewCharacter {
  NewCharacter {
    character:        character.into(),
    definition:       String::new(),
    pinyin:           String::new(),
    radical:          None,
    hsk_level:        None,
    is_radical:       false,
    script_type:      None,
    stroke_count:     None,
    decomposition:    None,
    variants:         None,
    radical_variants: None,
  }
}

fn hao() -> NewCharacter {
  NewCharacter {
    definition:    "good; well; proper".into(),
    pinyin:        "hǎo, hào".into(),
    radical:       Some("女".into()),
    hsk_level:     Some(1),
    script_type:   Some("simplified".into()),
    stroke_count:  Some(6),
    decomposition: Some("⿰女子".into()),
    ..row("好")
  }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_has_no_rows() {
  let s = store().await;
  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.lookup("一").await.unwrap().is_none());
}

#[tokio::test]
async fn lookup_roundtrips_every_column() {
  let s = store().await;
  s.replace_all(vec![hao()]).await.unwrap();

  let record = s.lookup("好").await.unwrap().expect("好 committed");
  assert_eq!(record.into_new(), hao());
}

#[tokio::test]
async fn nulls_stay_null() {
  let s = store().await;
  s.replace_all(vec![row("乂")]).await.unwrap();

  let record = s.lookup("乂").await.unwrap().unwrap();
  assert_eq!(record.definition, "");
  assert_eq!(record.radical, None);
  assert_eq!(record.hsk_level, None);
  assert_eq!(record.variants, None);
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_all_discards_previous_rows() {
  let s = store().await;
  assert_eq!(s.replace_all(vec![row("一"), row("二")]).await.unwrap(), 2);
  assert_eq!(s.replace_all(vec![row("三")]).await.unwrap(), 1);

  assert_eq!(s.count().await.unwrap(), 1);
  assert!(s.lookup("一").await.unwrap().is_none());
  assert!(s.lookup("三").await.unwrap().is_some());
}

#[tokio::test]
async fn ids_are_regenerated_per_import() {
  let s = store().await;
  s.replace_all(vec![row("一"), row("二")]).await.unwrap();
  s.replace_all(vec![row("二"), row("一")]).await.unwrap();

  // Fresh sequence after the reset: ids follow insertion order again.
  assert_eq!(s.lookup("二").await.unwrap().unwrap().id, 1);
  assert_eq!(s.lookup("一").await.unwrap().unwrap().id, 2);
}

#[tokio::test]
async fn duplicate_character_rolls_back() {
  let s = store().await;
  s.replace_all(vec![row("一")]).await.unwrap();

  let err = s
    .replace_all(vec![row("人"), row("大"), row("人")])
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateCharacter(ref c) if c == "人"));

  assert_eq!(s.count().await.unwrap(), 1);
  assert!(s.lookup("一").await.unwrap().is_some());
  assert!(s.lookup("大").await.unwrap().is_none());
}

#[tokio::test]
async fn non_positive_stroke_count_is_rejected() {
  let s = store().await;
  s.replace_all(vec![row("一")]).await.unwrap();

  let bad = NewCharacter { stroke_count: Some(0), ..row("〇") };
  let err = s.replace_all(vec![row("二"), bad]).await.unwrap_err();
  assert!(matches!(err, Error::ConstraintViolation { ref character, .. } if character == "〇"));

  assert_eq!(s.count().await.unwrap(), 1);
  assert!(s.lookup("二").await.unwrap().is_none());
}

#[tokio::test]
async fn empty_batch_clears_table() {
  let s = store().await;
  s.replace_all(vec![row("一")]).await.unwrap();
  assert_eq!(s.replace_all(Vec::new()).await.unwrap(), 0);
  assert_eq!(s.count().await.unwrap(), 0);
}

// ─── Decomposition ───────────────────────────────────────────────────────────

#[tokio::test]
async fn resolves_components_against_table() {
  let s = store().await;
  let nu = NewCharacter { radical: Some("女".into()), is_radical: true, ..row("女") };
  s.replace_all(vec![hao(), nu]).await.unwrap();

  let descriptor = s.lookup("好").await.unwrap().unwrap().decomposition;
  let parts = resolve_decomposition(&s, descriptor.as_deref()).await.unwrap();

  assert_eq!(parts.len(), 2);
  assert!(parts[0].record().is_some_and(|r| r.is_radical));
  assert_eq!(parts[1], Component::Unresolved { glyph: "子".into() });
}

// ─── Files ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn file_store_persists_across_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("hanzi.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.replace_all(vec![hao()]).await.unwrap();
  }

  let s = SqliteStore::open_read_only(&path).await.unwrap();
  assert_eq!(s.lookup("好").await.unwrap().unwrap().stroke_count, Some(6));
}

#[tokio::test]
async fn read_only_store_refuses_import() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("hanzi.db");
  SqliteStore::open(&path)
    .await
    .unwrap()
    .replace_all(vec![row("一")])
    .await
    .unwrap();

  let s = SqliteStore::open_read_only(&path).await.unwrap();
  let err = s.replace_all(vec![row("二")]).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(s.lookup("一").await.unwrap().is_some());
}

#[tokio::test]
async fn snapshot_copies_committed_rows() {
  let dir = tempfile::tempdir().unwrap();
  let dest = dir.path().join("snapshot.db");

  let s = store().await;
  s.replace_all(vec![hao(), row("一")]).await.unwrap();
  assert_eq!(s.snapshot(&dest).await.unwrap(), dest);

  let copy = SqliteStore::open_read_only(&dest).await.unwrap();
  assert_eq!(copy.count().await.unwrap(), 2);
  assert_eq!(copy.lookup("好").await.unwrap().unwrap().into_new(), hao());

  let err = s.snapshot(&dest).await.unwrap_err();
  assert!(matches!(err, Error::SnapshotExists(_)));
}

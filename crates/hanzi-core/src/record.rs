//! Committed character rows.
//!
//! A [`CharacterRecord`] is what a store hands back to query callers. A
//! [`NewCharacter`] is the same shape minus the surrogate `id`, which the
//! storage engine assigns at commit time and regenerates on every import.

use serde::{Deserialize, Serialize};

/// A fully-normalised row ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
  pub character:        String,
  /// Gloss; `""` when the source had none.
  pub definition:       String,
  /// Readings joined with `", "`; `""` when the source had none.
  pub pinyin:           String,
  pub radical:          Option<String>,
  pub hsk_level:        Option<i64>,
  /// Always `character == radical`; never set independently.
  pub is_radical:       bool,
  pub script_type:      Option<String>,
  pub stroke_count:     Option<i64>,
  pub decomposition:    Option<String>,
  pub variants:         Option<String>,
  pub radical_variants: Option<String>,
}

/// A committed row as read back from the store.
///
/// `id` is not stable across imports; external state should key on
/// `character`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
  pub id:               i64,
  pub character:        String,
  pub definition:       String,
  pub pinyin:           String,
  pub radical:          Option<String>,
  pub hsk_level:        Option<i64>,
  pub is_radical:       bool,
  pub script_type:      Option<String>,
  pub stroke_count:     Option<i64>,
  pub decomposition:    Option<String>,
  pub variants:         Option<String>,
  pub radical_variants: Option<String>,
}

impl CharacterRecord {
  /// Drop the surrogate key, leaving only the content that an import
  /// reproduces deterministically.
  pub fn into_new(self) -> NewCharacter {
    NewCharacter {
      character:        self.character,
      definition:       self.definition,
      pinyin:           self.pinyin,
      radical:          self.radical,
      hsk_level:        self.hsk_level,
      is_radical:       self.is_radical,
      script_type:      self.script_type,
      stroke_count:     self.stroke_count,
      decomposition:    self.decomposition,
      variants:         self.variants,
      radical_variants: self.radical_variants,
    }
  }
}

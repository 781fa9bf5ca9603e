//! Merge and normalise: the two pure steps between a decoded dictionary line
//! and a committed row.
//!
//! [`merge`] overlays the reference table onto a [`RawEntry`]; [`normalize`]
//! validates the result and fixes up field shapes. Neither touches I/O.

use serde_json::Value;

use crate::{
  Error, Result,
  entry::RawEntry,
  record::NewCharacter,
  reference::{ReferenceEntry, ReferenceTable},
};

/// Separator placed between readings in the stored `pinyin` string.
pub const PINYIN_SEPARATOR: &str = ", ";

// ─── Merge ───────────────────────────────────────────────────────────────────

/// A dictionary record with reference-table fields resolved, prior to
/// normalisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedEntry {
  pub character:        Option<String>,
  pub definition:       Option<String>,
  pub pinyin:           Option<Value>,
  pub radical:          Option<String>,
  pub hsk_level:        Option<i64>,
  pub script_type:      Option<String>,
  pub stroke_count:     Option<i64>,
  pub decomposition:    Option<String>,
  pub variants:         Option<String>,
  pub radical_variants: Option<String>,
}

impl EnrichedEntry {
  /// Whether the reference table supplied any metadata for this entry.
  pub fn has_reference_data(&self) -> bool {
    self.hsk_level.is_some()
      || self.script_type.is_some()
      || self.stroke_count.is_some()
      || self.decomposition.is_some()
      || self.variants.is_some()
  }
}

/// Combine a raw record with its reference entry, if any.
///
/// Level, script, strokes, decomposition and variants come only from the
/// reference table: with no entry they are `None`, whatever the raw record
/// carried. Definition, readings, radical and radical variants come only from
/// the raw record.
pub fn merge(raw: RawEntry, reference: &ReferenceTable) -> EnrichedEntry {
  let found = raw
    .character
    .as_deref()
    .and_then(|c| reference.get(c))
    .cloned()
    .unwrap_or_default();
  let ReferenceEntry { level, script, strokes, decomp, variant } = found;

  EnrichedEntry {
    character:        raw.character,
    definition:       raw.definition,
    pinyin:           raw.pinyin,
    radical:          raw.radical,
    hsk_level:        level,
    script_type:      script,
    stroke_count:     strokes,
    decomposition:    decomp,
    variants:         variant,
    radical_variants: raw.radical_variants.or(raw.variants),
  }
}

// ─── Normalise ───────────────────────────────────────────────────────────────

/// Join a list of readings into the display string; anything that is not a
/// list of strings becomes `""`.
pub fn join_pinyin(value: Option<&Value>) -> String {
  let Some(Value::Array(items)) = value else {
    return String::new();
  };
  items
    .iter()
    .map(Value::as_str)
    .collect::<Option<Vec<_>>>()
    .map(|readings| readings.join(PINYIN_SEPARATOR))
    .unwrap_or_default()
}

/// Validate an enriched entry and produce the final row.
///
/// Fails with [`Error::MissingCharacter`] if `character` is absent or empty.
pub fn normalize(entry: EnrichedEntry) -> Result<NewCharacter> {
  let character = entry
    .character
    .filter(|c| !c.is_empty())
    .ok_or(Error::MissingCharacter)?;

  let pinyin = join_pinyin(entry.pinyin.as_ref());
  let is_radical = entry.radical.as_deref() == Some(character.as_str());

  Ok(NewCharacter {
    definition: entry.definition.unwrap_or_default(),
    pinyin,
    radical: entry.radical,
    hsk_level: entry.hsk_level,
    is_radical,
    script_type: entry.script_type,
    stroke_count: entry.stroke_count,
    decomposition: entry.decomposition,
    variants: entry.variants,
    radical_variants: entry.radical_variants,
    character,
  })
}

//! The reference table: authoritative level, script, stroke, structure and
//! variant metadata keyed by character.
//!
//! Loaded once per run, before any merging, and never mutated afterwards. It
//! is passed explicitly to [`crate::enrich::merge`] rather than held as global
//! state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Reference metadata for a single character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
  pub level:   Option<i64>,
  pub script:  Option<String>,
  pub strokes: Option<i64>,
  pub decomp:  Option<String>,
  pub variant: Option<String>,
}

/// Immutable character → [`ReferenceEntry`] mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
  entries: HashMap<String, ReferenceEntry>,
}

impl ReferenceTable {
  /// Look up `character`. `None` is an ordinary outcome, not an error.
  pub fn get(&self, character: &str) -> Option<&ReferenceEntry> {
    self.entries.get(character)
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl FromIterator<(String, ReferenceEntry)> for ReferenceTable {
  fn from_iter<I: IntoIterator<Item = (String, ReferenceEntry)>>(iter: I) -> Self {
    Self { entries: iter.into_iter().collect() }
  }
}

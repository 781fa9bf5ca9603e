//! Decomposition descriptors and their single-level resolution.
//!
//! A descriptor such as `⿰女子` lists a character's constituents in
//! structural order, interleaved with Ideographic Description Characters that
//! describe layout. [`components`] separates the literal glyphs from the
//! layout operators; [`resolve_decomposition`] looks each glyph up in a
//! [`CharacterStore`].

use serde::{Deserialize, Serialize};

use crate::{record::CharacterRecord, store::CharacterStore};

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Ideographic Description Characters (⿰ ⿱ ⿲ … and the subtraction
/// operator ㇯). They describe geometry and never name a constituent.
fn is_structure_operator(c: char) -> bool {
  matches!(c, '\u{2FF0}'..='\u{2FFF}' | '\u{31EF}')
}

/// Placeholders for a component with no encoded glyph.
fn is_placeholder(c: char) -> bool { matches!(c, '？' | '?') }

fn is_variation_selector(c: char) -> bool {
  matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
}

/// Split a descriptor into the constituent glyphs it names, in order.
///
/// Repeated constituents are kept (`⿰木木` yields two `木`). Variation
/// selectors stay attached to the glyph they follow.
pub fn components(descriptor: &str) -> Vec<String> {
  let mut glyphs: Vec<String> = Vec::new();
  for c in descriptor.chars() {
    if is_variation_selector(c) {
      if let Some(last) = glyphs.last_mut() {
        last.push(c);
      }
      continue;
    }
    if is_structure_operator(c)
      || is_placeholder(c)
      || c.is_whitespace()
      || c.is_ascii_punctuation()
    {
      continue;
    }
    glyphs.push(c.to_string());
  }
  glyphs
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// The outcome of looking up one constituent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Component {
  Resolved {
    #[serde(flatten)]
    record: CharacterRecord,
  },
  /// The glyph has no committed row.
  Unresolved { glyph: String },
}

impl Component {
  /// The constituent glyph, whether or not it resolved.
  pub fn glyph(&self) -> &str {
    match self {
      Self::Resolved { record } => &record.character,
      Self::Unresolved { glyph } => glyph,
    }
  }

  pub fn record(&self) -> Option<&CharacterRecord> {
    match self {
      Self::Resolved { record } => Some(record),
      Self::Unresolved { .. } => None,
    }
  }

  pub fn is_resolved(&self) -> bool { matches!(self, Self::Resolved { .. }) }
}

/// Expand `descriptor` one level: one lookup per constituent glyph.
///
/// Missing constituents come back as [`Component::Unresolved`] in their
/// position; they never abort the expansion. A `None` or empty descriptor
/// yields an empty list. Resolved constituents are not themselves expanded;
/// callers re-invoke this with a constituent's own `decomposition` to go
/// deeper.
pub async fn resolve_decomposition<S: CharacterStore>(
  store:      &S,
  descriptor: Option<&str>,
) -> Result<Vec<Component>, S::Error> {
  let glyphs = components(descriptor.unwrap_or_default());
  let mut resolved = Vec::with_capacity(glyphs.len());

  for glyph in glyphs {
    let component = match store.lookup(&glyph).await? {
      Some(record) => Component::Resolved { record },
      None => {
        tracing::debug!(%glyph, "decomposition component not in table");
        Component::Unresolved { glyph }
      }
    };
    resolved.push(component);
  }

  Ok(resolved)
}

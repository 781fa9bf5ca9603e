//! Raw dictionary records, exactly as one source line decodes.
//!
//! The dictionary schema grew over time; every field except `character` was
//! added later and is optional. Unknown fields are ignored so newer sources
//! still decode.

use serde::Deserialize;
use serde_json::Value;

/// One decoded dictionary line before enrichment.
///
/// `character` is optional here so that a missing value surfaces as a
/// validation failure in [`crate::enrich::normalize`] rather than as an opaque
/// decode error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEntry {
  pub character:        Option<String>,
  pub definition:       Option<String>,
  /// Expected to be an ordered list of readings; anything else normalises to
  /// an empty string.
  pub pinyin:           Option<Value>,
  pub radical:          Option<String>,
  /// Superseded by the reference table; kept so older sources decode.
  pub hsk:              Option<i64>,
  pub variants:         Option<String>,
  pub radical_variants: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn decode(line: &str) -> RawEntry { serde_json::from_str(line).unwrap() }

  #[test]
  fn decodes_minimal_line() {
    let raw = decode(r#"{"character":"一","radical":"一"}"#);
    assert_eq!(raw.character.as_deref(), Some("一"));
    assert_eq!(raw.radical.as_deref(), Some("一"));
    assert!(raw.pinyin.is_none());
  }

  #[test]
  fn ignores_unknown_fields() {
    let raw = decode(r#"{"character":"人","frequency":12,"etymology":{"type":"pictographic"}}"#);
    assert_eq!(raw.character.as_deref(), Some("人"));
  }

  #[test]
  fn pinyin_is_kept_in_any_shape() {
    assert_eq!(
      decode(r#"{"character":"一","pinyin":["yī","yì"]}"#).pinyin,
      Some(serde_json::json!(["yī", "yì"]))
    );
    assert_eq!(
      decode(r#"{"character":"一","pinyin":"yī"}"#).pinyin,
      Some(Value::from("yī"))
    );
  }

  #[test]
  fn mistyped_field_fails_to_decode() {
    let err = serde_json::from_str::<RawEntry>(r#"{"character":"一","hsk":"one"}"#);
    assert!(err.is_err());
  }
}

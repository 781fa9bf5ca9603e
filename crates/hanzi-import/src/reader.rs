//! Streaming reader for the line-delimited JSON dictionary source.
//!
//! Lines are decoded one at a time into a reused buffer, so the working set
//! does not grow with the size of the source. The first failure ends the
//! stream: no later line is ever yielded.

use std::{
  fs::File,
  io::{BufRead, BufReader},
  iter::FusedIterator,
  path::Path,
};

use hanzi_core::entry::RawEntry;

use crate::{Error, Result};

/// A decoded record and the 1-based source line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
  pub line:  usize,
  pub entry: RawEntry,
}

/// Forward-only iterator of [`SourceLine`]s.
///
/// Blank lines are skipped. Not restartable; reopen the source to read it
/// again.
pub struct DictionaryReader<R> {
  inner: R,
  buf:   Vec<u8>,
  line:  usize,
  done:  bool,
}

impl DictionaryReader<BufReader<File>> {
  /// Open the dictionary file at `path`.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::SourceOpen {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(Self::new(BufReader::new(file)))
  }
}

impl<R: BufRead> DictionaryReader<R> {
  pub fn new(inner: R) -> Self {
    Self { inner, buf: Vec::new(), line: 0, done: false }
  }

  /// Number of physical lines consumed so far, blank ones included.
  pub fn lines_read(&self) -> usize { self.line }

  fn fail(&mut self, err: Error) -> Option<Result<SourceLine>> {
    self.done = true;
    Some(Err(err))
  }
}

impl<R: BufRead> Iterator for DictionaryReader<R> {
  type Item = Result<SourceLine>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    loop {
      self.buf.clear();
      match self.inner.read_until(b'\n', &mut self.buf) {
        Ok(0) => {
          self.done = true;
          return None;
        }
        Ok(_) => self.line += 1,
        Err(source) => {
          let line = self.line + 1;
          return self.fail(Error::SourceRead { line, source });
        }
      }

      let line = self.line;
      let text = match std::str::from_utf8(&self.buf) {
        Ok(text) => text,
        Err(source) => return self.fail(Error::Encoding { line, source }),
      };
      let text = text.strip_prefix('\u{FEFF}').unwrap_or(text).trim();
      if text.is_empty() {
        continue;
      }

      return match serde_json::from_str::<RawEntry>(text) {
        Ok(entry) => Some(Ok(SourceLine { line, entry })),
        Err(source) => self.fail(Error::Parse { line, source }),
      };
    }
  }
}

impl<R: BufRead> FusedIterator for DictionaryReader<R> {}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn reader(input: &str) -> DictionaryReader<Cursor<Vec<u8>>> {
    DictionaryReader::new(Cursor::new(input.as_bytes().to_vec()))
  }

  #[test]
  fn yields_one_record_per_line() {
    let lines: Vec<_> = reader(
      "{\"character\":\"一\",\"radical\":\"一\"}\n{\"character\":\"人\",\"pinyin\":[\"rén\"]}\n",
    )
    .collect::<Result<_>>()
    .unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line, 1);
    assert_eq!(lines[0].entry.character.as_deref(), Some("一"));
    assert_eq!(lines[1].line, 2);
    assert_eq!(lines[1].entry.pinyin, Some(serde_json::json!(["rén"])));
  }

  #[test]
  fn tolerates_bom_crlf_and_blank_lines() {
    let mut r = reader("\u{FEFF}{\"character\":\"一\"}\r\n\r\n   \n{\"character\":\"二\"}");
    assert_eq!(r.next().unwrap().unwrap().entry.character.as_deref(), Some("一"));

    let second = r.next().unwrap().unwrap();
    assert_eq!(second.line, 4);
    assert_eq!(second.entry.character.as_deref(), Some("二"));

    assert!(r.next().is_none());
    assert_eq!(r.lines_read(), 4);
  }

  #[test]
  fn halts_at_first_malformed_line() {
    let mut r = reader("{\"character\":\"一\"}\n{not json\n{\"character\":\"二\"}\n");
    assert!(r.next().unwrap().is_ok());

    let err = r.next().unwrap().unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));

    // Nothing after the failure, even though line 3 is well-formed.
    assert!(r.next().is_none());
    assert!(r.next().is_none());
  }

  #[test]
  fn invalid_utf8_is_a_decode_error() {
    let mut bytes = b"{\"character\":\"".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"\"}\n");
    let mut r = DictionaryReader::new(Cursor::new(bytes));

    assert!(matches!(r.next(), Some(Err(Error::Encoding { line: 1, .. }))));
    assert!(r.next().is_none());
  }

  #[test]
  fn invalid_utf8_after_good_lines_halts_stream() {
    let mut bytes = b"{\"character\":\"\xe4\xb8\x80\"}\n".to_vec();
    bytes.extend_from_slice(b"{\"character\":\"\xff\"}\n{\"character\":\"\xe4\xba\x8c\"}\n");
    let mut r = DictionaryReader::new(Cursor::new(bytes));

    assert_eq!(r.next().unwrap().unwrap().entry.character.as_deref(), Some("一"));
    assert!(matches!(r.next(), Some(Err(Error::Encoding { line: 2, .. }))));
    assert!(r.next().is_none());
  }

  #[test]
  fn missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let err = DictionaryReader::open(dir.path().join("absent.txt")).err().unwrap();
    assert!(matches!(err, Error::SourceOpen { .. }));
  }
}

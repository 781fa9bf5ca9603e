//! Reference-table loading.
//!
//! The table is a single JSON object keyed by character and is read in full
//! before any dictionary line is merged.

use std::{
  fs::File,
  io::{BufReader, Read},
  path::Path,
};

use hanzi_core::reference::ReferenceTable;

use crate::{Error, Result};

/// Load the reference table stored at `path`.
pub fn load_reference_table(path: impl AsRef<Path>) -> Result<ReferenceTable> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| Error::ReferenceRead {
    path: path.to_path_buf(),
    source,
  })?;
  read_reference_table(BufReader::new(file))
}

/// Decode a reference table from any reader.
pub fn read_reference_table(reader: impl Read) -> Result<ReferenceTable> {
  serde_json::from_reader(reader).map_err(Error::ReferenceParse)
}

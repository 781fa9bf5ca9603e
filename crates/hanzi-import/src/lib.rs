//! Dictionary import for the Hanzi knowledge base.
//!
//! Streams a line-delimited JSON dictionary, enriches each record from a
//! separately loaded reference table, and hands the complete normalised batch
//! to a [`hanzi_core::store::CharacterStore`] for a single atomic replace.
//!
//! # Quick start
//!
//! ```no_run
//! # async fn demo(store: impl hanzi_core::store::CharacterStore) -> hanzi_import::Result<()> {
//! let report = hanzi_import::run_import(
//!   &store,
//!   "data/dictionary.txt",
//!   "data/hsk_reference.json",
//! )
//! .await?;
//! println!("{} characters committed", report.committed);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod pipeline;
mod reader;
mod reference;

pub use error::{Error, Result};
pub use pipeline::{Batch, ImportReport, import_batch, prepare_batch, run_import};
pub use reader::{DictionaryReader, SourceLine};
pub use reference::{load_reference_table, read_reference_table};

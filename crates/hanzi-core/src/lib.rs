//! Core types and trait definitions for the Hanzi character knowledge base.
//!
//! This crate is deliberately free of file and database dependencies. It holds
//! the record shapes, the merge/normalize step that turns a dictionary line
//! into a committed row, and the decomposition resolver that runs against any
//! [`store::CharacterStore`].

pub mod decomposition;
pub mod enrich;
pub mod entry;
pub mod error;
pub mod record;
pub mod reference;
pub mod store;

pub use error::{Error, Result};

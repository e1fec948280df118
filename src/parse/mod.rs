//! Content parsing module
//!
//! Pure parsing helpers shared by the resource families: quote-aware CSV
//! tokenization and JSON well-formedness checks. No I/O here.

pub mod csv;
pub mod json;

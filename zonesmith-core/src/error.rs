//! Unified error type definition.
//!
//! Malformed input never raises an error here: unparsable rows and blocks are
//! dropped during extraction (see the extractor modules). The only fallible
//! surface is parsing a record-type keyword at a typed boundary.

use serde::Serialize;
use thiserror::Error;

/// Core conversion error type.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Record type keyword outside the supported set.
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}

/// Core Result type alias.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

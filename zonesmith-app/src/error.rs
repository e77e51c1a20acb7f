//! Unified error type definition.
//!
//! These are advisory states for the hosting frontend, not failures: every
//! parsing fallback inside the core is silent, and the session surfaces only
//! the conditions a user must act on.

use serde::Serialize;
use thiserror::Error;

/// Session layer error type.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum AppError {
    /// Nothing parseable in the pasted input; the session is unchanged.
    #[error("No DNS records found in input")]
    NoRecordsFound,

    /// Generation requested with an empty record list.
    #[error("No records to emit")]
    NothingToEmit,

    /// Manual add submitted without the fields its record type requires.
    #[error("Required record fields are missing")]
    MissingFields,
}

/// Session layer Result type alias.
pub type AppResult<T> = std::result::Result<T, AppError>;

//! Session layer for Zonesmith.
//!
//! [`ZoneSession`] is the single owner of mutable state: the current record
//! list, the last generated domain and the active type filter. Editing
//! surfaces (a grid, a TUI, a web form) stay stateless and talk to the
//! session through plain record data — load, field edits by index, deletes,
//! manual adds and zone generation all happen here, on top of the pure
//! conversion functions in `zonesmith-core`.

mod error;
mod form;
mod session;

pub use error::{AppError, AppResult};
pub use form::NewRecord;
pub use session::{default_ttl_or, RecordField, RecordFilter, ZoneSession};

// Re-export the boundary types frontends exchange with the session.
pub use zonesmith_core::{RecordType, ZoneFile, ZoneRecord};

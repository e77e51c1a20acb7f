//! Core conversion library for Zonesmith.
//!
//! Turns DNS record listings exported from a hosting control panel — either
//! the raw HTML of the panel's record table or loosely formatted text copied
//! out of it — into canonical BIND zone-file text, grouped by record type and
//! annotated with a CDN proxy heuristic.
//!
//! Everything here is synchronous and pure: functions take explicit inputs
//! (text, records, options) and return values. Session state (the current
//! record list, the last generated domain) belongs to the caller.

mod error;
mod extract;
mod normalize;
mod proxy;
mod types;
mod zone;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use extract::{parse_html, parse_input, parse_text};
pub use normalize::{
    base_domain, is_all_digits, norm, quote_txt, sanitize_domain, to_absolute_name, to_fqdn,
};
pub use proxy::infer_proxied;
pub use types::{ParsedRecords, RecordType, ZoneFile, ZoneRecord};
pub use zone::{build_zone, ZoneOptions};

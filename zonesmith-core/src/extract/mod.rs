//! Record extraction from pasted panel exports.
//!
//! Two input shapes are supported: the raw HTML of the panel's record table,
//! and plain text copied out of it. HTML wins whenever qualifying table rows
//! are present; otherwise the heuristic line-block parser runs.

mod html;
mod patterns;
mod text;

pub use html::parse_html;
pub use text::parse_text;

use crate::types::ParsedRecords;

/// Extract records from `input`, selecting the extractor by content.
///
/// `domain_override` (may be empty) takes precedence over the inferred base
/// domain; `default_ttl` replaces non-numeric TTLs.
#[must_use]
pub fn parse_input(input: &str, domain_override: &str, default_ttl: &str) -> ParsedRecords {
    match parse_html(input, domain_override, default_ttl) {
        Some(parsed) => parsed,
        None => parse_text(input, domain_override, default_ttl),
    }
}

/// First whitespace-delimited token, or empty.
pub(crate) fn first_token(text: &str) -> String {
    text.split_whitespace().next().unwrap_or("").to_string()
}

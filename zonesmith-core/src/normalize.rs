//! Text and domain-name canonicalization helpers.
//!
//! Panel exports are human-oriented: cells carry non-breaking spaces, ragged
//! whitespace, stray dots and mixed case. Every extractor funnels its raw
//! text through these helpers before a record is materialized.

use std::sync::LazyLock;

use regex::Regex;

/// Allowed characters in a sanitized domain.
static DOMAIN_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").expect("static pattern compiles"));

/// Runs of two or more dots.
static REPEATED_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("static pattern compiles"));

/// Dotted-quad IPv4 literal.
static IPV4_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("static pattern compiles"));

/// Hex-and-colon charset used to recognize IPv6 literals.
static IPV6_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9:]+$").expect("static pattern compiles"));

/// Collapse whitespace runs (including non-breaking spaces) to single spaces
/// and trim the ends.
#[must_use]
pub fn norm(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `text` is a non-empty run of ASCII decimal digits.
#[must_use]
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Clean a user-supplied domain, falling back when the result is unusable.
///
/// Lowercases, strips internal spaces, trims leading/trailing dots and
/// collapses repeated dots. Returns `fallback` when the cleaned value is
/// empty, contains characters outside `[a-z0-9.-]`, or has no dot at all.
#[must_use]
pub fn sanitize_domain(value: &str, fallback: &str) -> String {
    let lowered = norm(value).to_lowercase().replace(' ', "");
    let trimmed = lowered.trim_matches('.');
    let clean = REPEATED_DOTS.replace_all(trimmed, ".");

    if clean.is_empty() || !DOMAIN_CHARSET.is_match(&clean) || !clean.contains('.') {
        return fallback.to_string();
    }
    clean.into_owned()
}

/// Append a trailing dot unless the value already has one or is an address
/// literal.
///
/// IPv4 dotted quads and IPv6 literals (hex-and-colon charset with at least
/// one colon) pass through unmodified.
#[must_use]
pub fn to_fqdn(value: &str) -> String {
    let text = norm(value);
    if text.is_empty() || text.ends_with('.') {
        return text;
    }
    if IPV4_LITERAL.is_match(&text) {
        return text;
    }
    if text.contains(':') && IPV6_CHARSET.is_match(&text) {
        return text;
    }
    format!("{text}.")
}

/// Resolve a possibly-relative record name against the zone origin.
///
/// `"@"` and empty names mean the apex; a name containing a dot is taken as
/// already fully qualified; a bare label is anchored under `domain`. The
/// result always ends with exactly one trailing dot.
#[must_use]
pub fn to_absolute_name(name: &str, domain: &str) -> String {
    let text = norm(name);
    let text = text.strip_suffix('.').unwrap_or(&text);
    if text.is_empty() || text == "@" {
        return format!("{domain}.");
    }
    if text.contains('.') {
        return format!("{text}.");
    }
    format!("{text}.{domain}.")
}

/// Last two dot-separated labels of a name.
///
/// Known limitation: multi-label public suffixes are misinferred
/// (`example.co.uk` yields `co.uk`). Kept for compatibility with existing
/// exports.
#[must_use]
pub fn base_domain(name: &str) -> String {
    let clean = name.strip_suffix('.').unwrap_or(name);
    let parts: Vec<&str> = clean.split('.').collect();
    if parts.len() < 2 {
        return clean.to_string();
    }
    parts[parts.len() - 2..].join(".")
}

/// Wrap a TXT-style character string in quotes, escaping `\` and `"`.
#[must_use]
pub fn quote_txt(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- norm ----

    #[test]
    fn norm_collapses_whitespace_runs() {
        assert_eq!(norm("  a \t b\u{a0}\u{a0}c  "), "a b c");
        assert_eq!(norm(""), "");
        assert_eq!(norm("   "), "");
    }

    // ---- sanitize_domain ----

    #[test]
    fn sanitize_domain_cleans_dots_case_and_spaces() {
        assert_eq!(sanitize_domain(" Example .COM ", "fb.org"), "example.com");
        assert_eq!(sanitize_domain("..a..b..", "fb.org"), "a.b");
    }

    #[test]
    fn sanitize_domain_falls_back_on_unusable_input() {
        assert_eq!(sanitize_domain("", "fb.org"), "fb.org");
        assert_eq!(sanitize_domain("nodots", "fb.org"), "fb.org");
        assert_eq!(sanitize_domain("bad_chars.com", "fb.org"), "fb.org");
        assert_eq!(sanitize_domain("...", "fb.org"), "fb.org");
    }

    #[test]
    fn sanitize_domain_is_idempotent() {
        let once = sanitize_domain("  My..Site.Example.COM. ", "fb.org");
        assert_eq!(sanitize_domain(&once, "fb.org"), once);
        let fell_back = sanitize_domain("###", "fb.org");
        assert_eq!(sanitize_domain(&fell_back, "fb.org"), fell_back);
    }

    // ---- to_fqdn ----

    #[test]
    fn to_fqdn_appends_single_trailing_dot() {
        assert_eq!(to_fqdn("mail.example.com"), "mail.example.com.");
        assert_eq!(to_fqdn("mail.example.com."), "mail.example.com.");
        assert_eq!(to_fqdn(""), "");
    }

    #[test]
    fn to_fqdn_passes_address_literals_through() {
        assert_eq!(to_fqdn("203.0.113.9"), "203.0.113.9");
        assert_eq!(to_fqdn("2001:db8::1"), "2001:db8::1");
        assert_eq!(to_fqdn("::1"), "::1");
        // Colon alone is not enough; the charset must also be hex.
        assert_eq!(to_fqdn("not:a:literal:zz"), "not:a:literal:zz.");
    }

    // ---- to_absolute_name ----

    #[test]
    fn to_absolute_name_resolves_apex_and_labels() {
        assert_eq!(to_absolute_name("@", "example.com"), "example.com.");
        assert_eq!(to_absolute_name("", "example.com"), "example.com.");
        assert_eq!(to_absolute_name("www", "example.com"), "www.example.com.");
        assert_eq!(
            to_absolute_name("mail.example.com", "example.com"),
            "mail.example.com."
        );
        assert_eq!(
            to_absolute_name("mail.example.com.", "example.com"),
            "mail.example.com."
        );
    }

    #[test]
    fn to_absolute_name_always_ends_with_one_dot() {
        for name in ["@", "", "www", "a.b", "a.b.", "x-1"] {
            let abs = to_absolute_name(name, "example.com");
            assert!(abs.ends_with('.'), "missing trailing dot: {abs}");
            assert!(!abs.ends_with(".."), "double trailing dot: {abs}");
        }
    }

    // ---- base_domain ----

    #[test]
    fn base_domain_takes_last_two_labels() {
        assert_eq!(base_domain("www.example.com."), "example.com");
        assert_eq!(base_domain("example.com"), "example.com");
        assert_eq!(base_domain("localhost"), "localhost");
    }

    #[test]
    fn base_domain_misinfers_multi_label_suffixes() {
        // Compatibility behavior, not a target to fix silently.
        assert_eq!(base_domain("example.co.uk"), "co.uk");
    }

    // ---- quote_txt ----

    #[test]
    fn quote_txt_escapes_backslash_and_quote() {
        assert_eq!(quote_txt("v=spf1"), "\"v=spf1\"");
        assert_eq!(quote_txt(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}

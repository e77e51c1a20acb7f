//! Plain-text extractor (fallback).
//!
//! Handles text copied straight out of the panel's record table. A line
//! shaped like `<name> <ttl> <type>` opens a record block; everything up to
//! the next such line is the block body. Blank lines and the panel's
//! `actions` button caption are not part of any body.

use super::{first_token, patterns};
use crate::normalize::{
    base_domain, is_all_digits, quote_txt, sanitize_domain, to_absolute_name, to_fqdn,
};
use crate::proxy::infer_proxied;
use crate::types::{ParsedRecords, RecordType, ZoneRecord};

struct BlockStart<'a> {
    idx: usize,
    name: &'a str,
    ttl: &'a str,
    record_type: RecordType,
}

/// Extract records from loosely formatted pasted text.
///
/// Returns an empty result (empty domain, no records) when no start line is
/// found anywhere in the input. Blocks that yield no usable value are dropped
/// individually; source block order is preserved.
#[must_use]
pub fn parse_text(input: &str, domain_override: &str, default_ttl: &str) -> ParsedRecords {
    let unified = input.replace('\r', "");
    let lines: Vec<&str> = unified.lines().map(str::trim).collect();

    let mut starts: Vec<BlockStart<'_>> = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = patterns::BLOCK_START.captures(line) else {
            continue;
        };
        let (Some(name), Some(ttl), Some(keyword)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        if let Ok(record_type) = keyword.as_str().parse::<RecordType>() {
            starts.push(BlockStart {
                idx,
                name: name.as_str(),
                ttl: ttl.as_str(),
                record_type,
            });
        }
    }
    let Some(first) = starts.first() else {
        return ParsedRecords::default();
    };

    let domain = sanitize_domain(domain_override, &base_domain(first.name));
    let mut records = Vec::new();

    for (i, start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(lines.len(), |next| next.idx);
        let body: Vec<&str> = lines[start.idx + 1..end]
            .iter()
            .copied()
            .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case("actions"))
            .collect();

        let value = match start.record_type {
            RecordType::A | RecordType::Aaaa => {
                body.first().map(|line| first_token(line)).unwrap_or_default()
            }
            RecordType::Cname => body
                .first()
                .map(|line| to_fqdn(&first_token(line)))
                .unwrap_or_default(),
            RecordType::Mx => mx_value(&body),
            RecordType::Srv => srv_value(&body),
            RecordType::Txt => txt_value(&body),
            RecordType::Caa => body.join(" "),
        };
        if value.is_empty() {
            log::debug!(
                "dropping {} block {:?}: no usable value",
                start.record_type,
                start.name
            );
            continue;
        }

        let name = to_absolute_name(start.name, &domain);
        let proxied = infer_proxied(&name, &domain);
        let ttl = if is_all_digits(start.ttl) {
            start.ttl.to_string()
        } else {
            default_ttl.to_string()
        };
        records.push(ZoneRecord {
            name,
            ttl,
            record_type: start.record_type,
            value,
            proxied,
        });
    }

    ParsedRecords { domain, records }
}

/// Structured MX body, or the first body line verbatim as a degraded
/// fallback.
fn mx_value(body: &[&str]) -> String {
    let joined = body.join(" ");
    if let Some(caps) = patterns::MX_VALUE.captures(&joined) {
        return format!("{} {}", &caps[1], to_fqdn(&caps[2]));
    }
    body.first().map_or_else(String::new, ToString::to_string)
}

/// Structured SRV body, with the same degraded fallback as MX.
fn srv_value(body: &[&str]) -> String {
    let joined = body.join(" ");
    if let Some(caps) = patterns::SRV_VALUE.captures(&joined) {
        return format!(
            "{} {} {} {}",
            &caps[1],
            &caps[2],
            &caps[3],
            to_fqdn(&caps[4])
        );
    }
    body.first().map_or_else(String::new, ToString::to_string)
}

/// One fragment per body line: quotes stripped, empties dropped, the rest
/// re-quoted and space-joined.
fn txt_value(body: &[&str]) -> String {
    let parts: Vec<&str> = body
        .iter()
        .map(|line| line.trim_matches('"'))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    parts
        .iter()
        .map(|part| quote_txt(part))
        .collect::<Vec<_>>()
        .join(" ")
}

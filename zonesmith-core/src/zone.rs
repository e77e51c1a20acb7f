//! Zone-file assembly and serialization.

use chrono::{DateTime, Local};

use crate::normalize::{is_all_digits, norm, sanitize_domain, to_absolute_name, to_fqdn};
use crate::types::{RecordType, ZoneFile, ZoneRecord};

/// Inputs for [`build_zone`] beyond the records themselves.
#[derive(Debug, Clone)]
pub struct ZoneOptions {
    /// User-supplied domain, tried first.
    pub domain_override: String,
    /// Domain remembered from the previous load/generate, tried second;
    /// `example.com` stands in when both are unusable.
    pub last_domain: String,
    /// Replacement TTL for records whose TTL is not all digits.
    pub default_ttl: String,
    /// Export timestamp written into the header. Injected by the caller so
    /// the builder stays deterministic under test.
    pub generated_at: DateTime<Local>,
}

/// Render `records` into grouped zone-file text.
///
/// Every record is re-validated against the resolved domain: names are
/// re-anchored, non-numeric TTLs replaced, values whitespace-normalized, and
/// records left without a value dropped. Sections follow the fixed
/// A, AAAA, CNAME, MX, SRV, TXT, CAA order; relative order within a section
/// is preserved. The resolved domain is returned alongside the text and
/// should become the caller's new last known domain.
#[must_use]
pub fn build_zone(records: &[ZoneRecord], options: &ZoneOptions) -> ZoneFile {
    let domain = sanitize_domain(
        &options.domain_override,
        &sanitize_domain(&options.last_domain, "example.com"),
    );

    let mut lines = vec![
        format!(";; Domain:     {domain}."),
        format!(
            ";; Exported:   {}",
            options.generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
        ";;".to_string(),
        ";; This file is generated from cPanel HTML table data.".to_string(),
        ";; Review records before production use.".to_string(),
        ";;".to_string(),
        String::new(),
    ];

    for record_type in RecordType::ALL {
        let section: Vec<String> = records
            .iter()
            .filter(|record| record.record_type == record_type)
            .filter_map(|record| render_line(record, &domain, &options.default_ttl))
            .collect();
        if section.is_empty() {
            continue;
        }
        lines.push(format!(";; {record_type} Records"));
        lines.extend(section);
        lines.push(String::new());
    }

    let text = lines.join("\n") + "\n";
    ZoneFile { domain, text }
}

/// One tab-separated zone line, or `None` when the record has no value left
/// after normalization.
fn render_line(record: &ZoneRecord, domain: &str, default_ttl: &str) -> Option<String> {
    let value = norm(&record.value);
    if value.is_empty() {
        log::debug!(
            "skipping {} record {:?}: empty value",
            record.record_type,
            record.name
        );
        return None;
    }

    let name = to_absolute_name(&record.name, domain);
    let ttl = if is_all_digits(&record.ttl) {
        record.ttl.as_str()
    } else {
        default_ttl
    };
    let record_type = record.record_type;

    // Alias targets are re-qualified; address literals pass through as-is.
    let value = if record_type == RecordType::Cname {
        to_fqdn(&value)
    } else {
        value
    };

    let mut line = format!("{name}\t{ttl}\tIN\t{record_type}\t{value}");
    if record_type.supports_proxy() {
        line.push_str(&format!(" ; cf_tags=cf-proxied:{}", record.proxied));
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(name: &str, ttl: &str, record_type: RecordType, value: &str) -> ZoneRecord {
        ZoneRecord {
            name: name.to_string(),
            ttl: ttl.to_string(),
            record_type,
            value: value.to_string(),
            proxied: false,
        }
    }

    fn options(domain_override: &str, last_domain: &str) -> Option<ZoneOptions> {
        let generated_at = Local.with_ymd_and_hms(2024, 5, 17, 14, 30, 5).single()?;
        Some(ZoneOptions {
            domain_override: domain_override.to_string(),
            last_domain: last_domain.to_string(),
            default_ttl: "3600".to_string(),
            generated_at,
        })
    }

    // ---- Header ----

    #[test]
    fn header_carries_domain_and_fixed_timestamp() {
        let opts = options("example.com", "");
        assert!(opts.is_some(), "fixture timestamp is ambiguous");
        let Some(opts) = opts else {
            return;
        };
        let zone = build_zone(&[], &opts);
        let lines: Vec<&str> = zone.text.lines().collect();
        assert_eq!(lines[0], ";; Domain:     example.com.");
        assert_eq!(lines[1], ";; Exported:   2024-05-17 14:30:05");
        assert_eq!(lines[2], ";;");
        assert_eq!(
            lines[3],
            ";; This file is generated from cPanel HTML table data."
        );
        assert_eq!(lines[4], ";; Review records before production use.");
        assert_eq!(lines[5], ";;");
        assert_eq!(lines[6], "");
        assert!(zone.text.ends_with('\n'), "missing trailing newline");
    }

    // ---- Line rendering ----

    #[test]
    fn a_record_line_carries_proxy_tag() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let mut rec = record("www.example.com.", "300", RecordType::A, "203.0.113.9");
        rec.proxied = true;
        let zone = build_zone(&[rec], &opts);
        assert!(
            zone.text.contains(";; A Records\n"),
            "missing banner in: {}",
            zone.text
        );
        assert!(
            zone.text
                .contains("www.example.com.\t300\tIN\tA\t203.0.113.9 ; cf_tags=cf-proxied:true\n"),
            "missing line in: {}",
            zone.text
        );
    }

    #[test]
    fn non_address_lines_never_carry_proxy_tag() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(
            &[record(
                "mail.example.com.",
                "1800",
                RecordType::Mx,
                "10 mail.example.com.",
            )],
            &opts,
        );
        assert!(
            zone.text
                .contains("mail.example.com.\t1800\tIN\tMX\t10 mail.example.com.\n"),
            "missing line in: {}",
            zone.text
        );
        assert!(!zone.text.contains("cf_tags"), "stray tag in: {}", zone.text);
    }

    #[test]
    fn cname_value_is_requalified() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(
            &[record("blog", "300", RecordType::Cname, "hosting.example.net")],
            &opts,
        );
        assert!(
            zone.text.contains(
                "blog.example.com.\t300\tIN\tCNAME\thosting.example.net. ; cf_tags=cf-proxied:false\n"
            ),
            "missing line in: {}",
            zone.text
        );
    }

    // ---- Sections ----

    #[test]
    fn sections_follow_fixed_type_order() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(
            &[
                record("example.com.", "3600", RecordType::Txt, "\"v=spf1 -all\""),
                record("www", "300", RecordType::A, "203.0.113.9"),
                record("mail", "1800", RecordType::Mx, "10 mail.example.com."),
            ],
            &opts,
        );
        let a = zone.text.find(";; A Records");
        let mx = zone.text.find(";; MX Records");
        let txt = zone.text.find(";; TXT Records");
        assert!(
            a.is_some() && mx.is_some() && txt.is_some(),
            "missing banner in: {}",
            zone.text
        );
        assert!(a < mx && mx < txt, "section order wrong in: {}", zone.text);
        assert!(
            !zone.text.contains(";; CNAME Records"),
            "empty bucket emitted a banner"
        );
    }

    #[test]
    fn relative_order_within_a_section_is_preserved() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(
            &[
                record("b", "300", RecordType::A, "203.0.113.2"),
                record("a", "300", RecordType::A, "203.0.113.1"),
            ],
            &opts,
        );
        let b = zone.text.find("b.example.com.");
        let a = zone.text.find("a.example.com.");
        assert!(
            b.is_some() && a.is_some(),
            "missing lines in: {}",
            zone.text
        );
        assert!(b < a, "relative order lost in: {}", zone.text);
    }

    // ---- Re-validation ----

    #[test]
    fn non_numeric_ttl_is_replaced_with_default() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(
            &[record("www", "soon", RecordType::A, "203.0.113.9")],
            &opts,
        );
        assert!(
            zone.text.contains("www.example.com.\t3600\tIN\tA"),
            "ttl not defaulted in: {}",
            zone.text
        );
    }

    #[test]
    fn empty_valued_records_are_dropped() {
        let Some(opts) = options("example.com", "") else {
            return;
        };
        let zone = build_zone(&[record("www", "300", RecordType::A, "   ")], &opts);
        assert!(
            !zone.text.contains(";; A Records"),
            "dropped record still emitted: {}",
            zone.text
        );
    }

    // ---- Domain resolution ----

    #[test]
    fn domain_falls_back_from_override_to_last_to_default() {
        let Some(opts) = options("not a domain", "remembered.net") else {
            return;
        };
        assert_eq!(build_zone(&[], &opts).domain, "remembered.net");

        let Some(opts) = options("", "") else {
            return;
        };
        assert_eq!(build_zone(&[], &opts).domain, "example.com");

        let Some(opts) = options("chosen.org", "remembered.net") else {
            return;
        };
        assert_eq!(build_zone(&[], &opts).domain, "chosen.org");
    }
}

//! HTML-table extractor.
//!
//! Works directly on the markup the panel renders: qualifying rows are
//! `tr.recordTableRow` elements carrying `data-title`d Name/Type/Record cells
//! (TTL optional). The selectors are part of the compatibility contract with
//! the panel and must match its markup verbatim.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{first_token, patterns};
use crate::normalize::{
    base_domain, is_all_digits, norm, quote_txt, sanitize_domain, to_absolute_name, to_fqdn,
};
use crate::proxy::infer_proxied;
use crate::types::{ParsedRecords, RecordType, ZoneRecord};

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.recordTableRow").expect("static selector parses"));

static NAME_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[data-title="Name"]"#).expect("static selector parses"));

static TYPE_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[data-title="Type"]"#).expect("static selector parses"));

static TTL_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"td[data-title="TTL"]"#).expect("static selector parses"));

static RECORD_CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"td[data-title="Record"]"#).expect("static selector parses")
});

/// One nested detail `<div>` per quoted TXT segment.
static TXT_DETAIL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[id^="txt_detail_"] > div"#).expect("static selector parses")
});

/// Extract records from an HTML fragment.
///
/// Returns `None` when no qualifying table rows exist at all, signalling the
/// caller to try the plain-text extractor instead. Rows that qualify but
/// yield no usable value are dropped individually.
#[must_use]
pub fn parse_html(input: &str, domain_override: &str, default_ttl: &str) -> Option<ParsedRecords> {
    let document = Html::parse_fragment(input);
    let rows: Vec<ElementRef<'_>> = document
        .select(&ROW)
        .filter(|row| {
            row.select(&NAME_CELL).next().is_some()
                && row.select(&TYPE_CELL).next().is_some()
                && row.select(&RECORD_CELL).next().is_some()
        })
        .collect();
    let first_row = rows.first()?;

    let first_name = cell_text(*first_row, &NAME_CELL).unwrap_or_default();
    let domain = sanitize_domain(domain_override, &base_domain(&first_name));

    let records = rows
        .iter()
        .filter_map(|row| parse_row(*row, &domain, default_ttl))
        .collect();

    Some(ParsedRecords { domain, records })
}

/// Normalized text of the first cell matching `selector`, if any.
fn cell_text(row: ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|cell| norm(&cell.text().collect::<String>()))
}

fn parse_row(row: ElementRef<'_>, domain: &str, default_ttl: &str) -> Option<ZoneRecord> {
    let name_raw = cell_text(row, &NAME_CELL)?;
    let type_raw = cell_text(row, &TYPE_CELL)?;
    let record_cell = row.select(&RECORD_CELL).next()?;
    let record_text = norm(&record_cell.text().collect::<String>());

    let record_type = match type_raw.parse::<RecordType>() {
        Ok(record_type) => record_type,
        Err(_) => {
            log::debug!("dropping row with unsupported type {type_raw:?}");
            return None;
        }
    };

    let ttl_raw = cell_text(row, &TTL_CELL).unwrap_or_else(|| default_ttl.to_string());
    let ttl = if is_all_digits(&ttl_raw) {
        ttl_raw
    } else {
        default_ttl.to_string()
    };
    let name = to_absolute_name(&name_raw, domain);
    let proxied = infer_proxied(&name, domain);

    let value = match record_type {
        RecordType::A | RecordType::Aaaa => first_token(&record_text),
        RecordType::Cname => to_fqdn(&first_token(&record_text)),
        RecordType::Mx => mx_value(&record_text),
        RecordType::Srv => srv_value(&record_text),
        RecordType::Txt => txt_value(record_cell, &record_text),
        RecordType::Caa => caa_value(&record_text),
    };
    if value.is_empty() {
        log::debug!("dropping {record_type} row {name:?}: no usable value");
        return None;
    }

    Some(ZoneRecord {
        name,
        ttl,
        record_type,
        value,
        proxied,
    })
}

fn mx_value(text: &str) -> String {
    patterns::MX_VALUE
        .captures(text)
        .map(|caps| format!("{} {}", &caps[1], to_fqdn(&caps[2])))
        .unwrap_or_default()
}

fn srv_value(text: &str) -> String {
    patterns::SRV_VALUE
        .captures(text)
        .map(|caps| {
            format!(
                "{} {} {} {}",
                &caps[1],
                &caps[2],
                &caps[3],
                to_fqdn(&caps[4])
            )
        })
        .unwrap_or_default()
}

fn caa_value(text: &str) -> String {
    patterns::CAA_VALUE
        .captures(text)
        .map(|caps| format!("{} {} {}", &caps[1], &caps[2], quote_txt(&norm(&caps[3]))))
        .unwrap_or_default()
}

/// Collect TXT fragments from the cell's nested detail nodes.
///
/// Each fragment loses its surrounding quotes and the `path=/` rendering
/// artifact is discarded. When the panel emitted no detail nodes the whole
/// cell text stands in as a single fragment. Fragments are re-quoted and
/// space-joined, one quoted string per source segment.
fn txt_value(cell: ElementRef<'_>, cell_text: &str) -> String {
    let mut parts: Vec<String> = cell
        .select(&TXT_DETAIL)
        .map(|node| {
            norm(&node.text().collect::<String>())
                .trim_matches('"')
                .to_string()
        })
        .filter(|part| !part.is_empty() && part != "path=/")
        .collect();
    if parts.is_empty() && !cell_text.is_empty() {
        parts.push(cell_text.to_string());
    }
    parts
        .iter()
        .map(|part| quote_txt(part))
        .collect::<Vec<_>>()
        .join(" ")
}

//! Mutable conversion session.

use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use zonesmith_core::{
    build_zone, is_all_digits, norm, parse_input, sanitize_domain, to_absolute_name, RecordType,
    ZoneFile, ZoneOptions, ZoneRecord,
};

use crate::error::{AppError, AppResult};
use crate::form::NewRecord;

/// Fallback default TTL (seconds).
const FALLBACK_TTL: &str = "3600";

/// Fallback origin when no domain was ever supplied or inferred.
const FALLBACK_DOMAIN: &str = "example.com";

/// Effective default TTL: the supplied value when it is all digits, else
/// `"3600"`.
#[must_use]
pub fn default_ttl_or(input: &str) -> String {
    let text = norm(input);
    if is_all_digits(&text) {
        text
    } else {
        FALLBACK_TTL.to_string()
    }
}

/// Editable record fields, keyed the way editing surfaces name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    /// Record name.
    Name,
    /// TTL string.
    Ttl,
    /// Record type keyword.
    Type,
    /// Canonical value.
    Value,
    /// Proxy flag (`"true"`/`"false"`).
    Proxied,
}

impl FromStr for RecordField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "ttl" => Ok(Self::Ttl),
            "type" => Ok(Self::Type),
            "value" => Ok(Self::Value),
            "proxied" => Ok(Self::Proxied),
            _ => Err(format!("Unknown record field: {s}")),
        }
    }
}

/// Which records an editing surface should display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFilter {
    /// Show everything.
    #[default]
    All,
    /// Show one record type.
    Only(RecordType),
}

impl RecordFilter {
    fn matches(self, record: &ZoneRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(record_type) => record.record_type == record_type,
        }
    }
}

/// Owner of all mutable conversion state.
///
/// Holds the working record list, the last generated/loaded domain and the
/// active display filter. Parsing and serialization are delegated to the
/// pure core functions; nothing here touches I/O.
#[derive(Debug, Default)]
pub struct ZoneSession {
    records: Vec<ZoneRecord>,
    last_domain: String,
    filter: RecordFilter,
}

impl ZoneSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current records, in working order.
    #[must_use]
    pub fn records(&self) -> &[ZoneRecord] {
        &self.records
    }

    /// Domain remembered from the last successful load or generation.
    #[must_use]
    pub fn last_domain(&self) -> &str {
        &self.last_domain
    }

    /// Active display filter.
    #[must_use]
    pub fn filter(&self) -> RecordFilter {
        self.filter
    }

    /// Replace the working set with records extracted from `input`.
    ///
    /// On success the inferred domain becomes the session's last known
    /// domain. When nothing parseable is found the session is left untouched
    /// and [`AppError::NoRecordsFound`] is returned.
    pub fn load(&mut self, input: &str, domain_override: &str, default_ttl: &str) -> AppResult<()> {
        let override_clean = sanitize_domain(domain_override, "");
        let parsed = parse_input(input, &override_clean, &default_ttl_or(default_ttl));
        if parsed.records.is_empty() {
            return Err(AppError::NoRecordsFound);
        }
        log::info!(
            "loaded {} records for {}",
            parsed.records.len(),
            parsed.domain
        );
        self.records = parsed.records;
        self.last_domain = parsed.domain;
        Ok(())
    }

    /// Apply one field edit by working-set index.
    ///
    /// Out-of-range indexes and unknown type keywords are ignored. Records
    /// edited down to an empty name or value are removed, the same way an
    /// editing grid compacts its rows.
    pub fn apply_edit(&mut self, index: usize, field: RecordField, value: &str) {
        if let Some(record) = self.records.get_mut(index) {
            match field {
                RecordField::Name => record.name = norm(value),
                RecordField::Ttl => record.ttl = norm(value),
                RecordField::Type => {
                    if let Ok(record_type) = value.parse::<RecordType>() {
                        record.record_type = record_type;
                    }
                }
                RecordField::Value => record.value = norm(value),
                RecordField::Proxied => record.proxied = value == "true",
            }
        }
        self.records
            .retain(|record| !record.name.is_empty() && !record.value.is_empty());
    }

    /// Delete a record by working-set index; out-of-range is a no-op.
    pub fn delete(&mut self, index: usize) {
        if index < self.records.len() {
            self.records.remove(index);
        }
    }

    /// Drop all records. The last known domain survives for the next load.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Set the display filter.
    pub fn set_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
    }

    /// Records visible under the active filter, paired with their
    /// working-set indexes (edits and deletes are keyed by these, not by
    /// display position).
    #[must_use]
    pub fn visible_records(&self) -> Vec<(usize, &ZoneRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(record))
            .collect()
    }

    /// Compose and insert a manual record at the top of the working set.
    pub fn add_record(
        &mut self,
        form: &NewRecord,
        domain_override: &str,
        default_ttl: &str,
    ) -> AppResult<()> {
        let fallback = if self.last_domain.is_empty() {
            FALLBACK_DOMAIN
        } else {
            self.last_domain.as_str()
        };
        let domain = sanitize_domain(domain_override, fallback);
        let name = to_absolute_name(&norm(&form.name), &domain);
        let ttl = if form.ttl == "AUTO" {
            default_ttl_or(default_ttl)
        } else {
            form.ttl.clone()
        };
        let (value, proxied) = form.compose_value();
        if value.is_empty() {
            return Err(AppError::MissingFields);
        }
        log::info!("added {} record at top", form.record_type);
        self.records.insert(
            0,
            ZoneRecord {
                name,
                ttl,
                record_type: form.record_type,
                value,
                proxied,
            },
        );
        Ok(())
    }

    /// Generate zone text from the working set.
    ///
    /// The resolved domain is remembered as the session's last known domain.
    /// `generated_at` is the export timestamp, normally `Local::now()`.
    pub fn generate(
        &mut self,
        domain_override: &str,
        default_ttl: &str,
        generated_at: DateTime<Local>,
    ) -> AppResult<ZoneFile> {
        if self.records.is_empty() {
            return Err(AppError::NothingToEmit);
        }
        let options = ZoneOptions {
            domain_override: domain_override.to_string(),
            last_domain: self.last_domain.clone(),
            default_ttl: default_ttl_or(default_ttl),
            generated_at,
        };
        let zone = build_zone(&self.records, &options);
        log::info!(
            "generated zone for {} with {} records",
            zone.domain,
            self.records.len()
        );
        self.last_domain = zone.domain.clone();
        Ok(zone)
    }

    /// Derive a safe download file name for the zone text.
    ///
    /// Characters outside `[A-Za-z0-9._-]` become underscores; `zone.txt`
    /// when no usable domain is known at all.
    #[must_use]
    pub fn export_file_name(&self, domain_override: &str) -> String {
        let domain = sanitize_domain(domain_override, &sanitize_domain(&self.last_domain, "zone"));
        let safe: String = domain
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{safe}.txt")
    }
}

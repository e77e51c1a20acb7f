//! Record and result types exchanged with editing surfaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// DNS record type identifier.
///
/// Covers the types a panel record table exports. Serialized as uppercase
/// strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RecordType {
    /// Fixed emission order for zone-file sections.
    pub const ALL: [Self; 7] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Srv,
        Self::Txt,
        Self::Caa,
    ];

    /// Uppercase keyword for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Caa => "CAA",
        }
    }

    /// Whether the CDN proxy tag applies to this type.
    ///
    /// Only address and alias records can sit behind the proxy; the flag is
    /// carried but ignored at emission time for everything else.
    #[must_use]
    pub fn supports_proxy(self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            "CAA" => Ok(Self::Caa),
            _ => Err(CoreError::UnknownRecordType(s.to_string())),
        }
    }
}

/// A single canonical DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    /// Absolute name, terminated with a single trailing dot.
    pub name: String,
    /// TTL in seconds, as a decimal-digit string.
    pub ttl: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Type-specific canonical value. Never empty.
    pub value: String,
    /// CDN proxy heuristic result. Meaningful for A/AAAA/CNAME only.
    pub proxied: bool,
}

/// Extraction result: the inferred origin plus records in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedRecords {
    /// Lowercase registrable domain, no trailing dot. Empty when nothing
    /// parseable was found.
    pub domain: String,
    /// Extracted records, in source order.
    pub records: Vec<ZoneRecord>,
}

/// Rendered zone output paired with the resolved origin.
///
/// Callers should remember `domain` as the session's last known domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneFile {
    /// Resolved origin domain.
    pub domain: String,
    /// Full zone-file text, ending with a newline.
    pub text: String,
}

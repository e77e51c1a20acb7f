//! Manual add-record form input.

use serde::{Deserialize, Serialize};

use zonesmith_core::{norm, quote_txt, to_fqdn, RecordType};

/// Input for a manually added record.
///
/// Mirrors the add form of an editing surface: one main value plus
/// type-specific extras. Extras are optional strings so a partially filled
/// form can cross the boundary as-is; empty fields take the documented
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    /// Record type to add.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Relative or absolute name; empty means the zone apex.
    #[serde(default)]
    pub name: String,
    /// TTL in seconds, or `"AUTO"` to inherit the session default.
    pub ttl: String,
    /// Primary value: address, target host, CAA value or single-line TXT
    /// helper.
    #[serde(default)]
    pub main_value: String,
    /// Requested proxy state. Forced off for TXT and CAA.
    #[serde(default)]
    pub proxied: bool,
    /// MX priority; defaults to `10`.
    #[serde(default)]
    pub mx_priority: Option<String>,
    /// SRV priority; defaults to `0`.
    #[serde(default)]
    pub srv_priority: Option<String>,
    /// SRV weight; defaults to `0`.
    #[serde(default)]
    pub srv_weight: Option<String>,
    /// SRV port; defaults to `443`.
    #[serde(default)]
    pub srv_port: Option<String>,
    /// CAA flag; defaults to `0`.
    #[serde(default)]
    pub caa_flag: Option<String>,
    /// CAA tag; defaults to `issue`.
    #[serde(default)]
    pub caa_tag: Option<String>,
    /// Multi-line TXT content, one quoted fragment per line. Falls back to
    /// the main value when empty.
    #[serde(default)]
    pub txt_content: Option<String>,
}

impl Default for NewRecord {
    fn default() -> Self {
        Self {
            record_type: RecordType::A,
            name: String::new(),
            ttl: "AUTO".to_string(),
            main_value: String::new(),
            proxied: false,
            mx_priority: None,
            srv_priority: None,
            srv_weight: None,
            srv_port: None,
            caa_flag: None,
            caa_tag: None,
            txt_content: None,
        }
    }
}

impl NewRecord {
    /// Compose the canonical record value and the effective proxy flag.
    ///
    /// An empty value means required fields are missing and nothing should
    /// be added.
    pub(crate) fn compose_value(&self) -> (String, bool) {
        let main = norm(&self.main_value);
        match self.record_type {
            RecordType::A | RecordType::Aaaa => (main, self.proxied),
            RecordType::Cname => (to_fqdn(&main), self.proxied),
            RecordType::Mx => {
                if main.is_empty() {
                    return (String::new(), self.proxied);
                }
                let priority = field_or(self.mx_priority.as_deref(), "10");
                (format!("{priority} {}", to_fqdn(&main)), self.proxied)
            }
            RecordType::Srv => {
                if main.is_empty() {
                    return (String::new(), self.proxied);
                }
                let priority = field_or(self.srv_priority.as_deref(), "0");
                let weight = field_or(self.srv_weight.as_deref(), "0");
                let port = field_or(self.srv_port.as_deref(), "443");
                (
                    format!("{priority} {weight} {port} {}", to_fqdn(&main)),
                    self.proxied,
                )
            }
            RecordType::Txt => {
                let content = self.txt_content.as_deref().unwrap_or("");
                let fragments: Vec<String> = content
                    .lines()
                    .map(norm)
                    .filter(|part| !part.is_empty())
                    .collect();
                let value = if fragments.is_empty() {
                    if main.is_empty() {
                        String::new()
                    } else {
                        quote_txt(&main)
                    }
                } else {
                    fragments
                        .iter()
                        .map(|part| quote_txt(part))
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                (value, false)
            }
            RecordType::Caa => {
                if main.is_empty() {
                    return (String::new(), false);
                }
                let flag = field_or(self.caa_flag.as_deref(), "0");
                let tag = field_or(self.caa_tag.as_deref(), "issue");
                (format!("{flag} {tag} {}", quote_txt(&main)), false)
            }
        }
    }
}

/// Normalized extra-field value, or `fallback` when absent/empty.
fn field_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(norm)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

//! Shared regular expressions for structured record values.
//!
//! The greedy `.*` between labeled fields deliberately mirrors how the panel
//! renders them on one line; with several occurrences of a label, the last
//! one wins.

use std::sync::LazyLock;

use regex::Regex;

/// Start of a pasted-text record block: `<name> <ttl> <type>`.
pub(crate) static BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\S+)\s+(\d+)\s+(A|AAAA|CNAME|MX|SRV|TXT|CAA)\b")
        .expect("static pattern compiles")
});

/// MX cell/body: `Priority: <digits> ... Destination: <token>`.
pub(crate) static MX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Priority:\s*(\d+).*Destination:\s*(\S+)").expect("static pattern compiles")
});

/// SRV cell/body: `Priority/Weight/Port/Target` quad.
pub(crate) static SRV_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Priority:\s*(\d+).*Weight:\s*(\d+).*Port:\s*(\d+).*Target:\s*(\S+)")
        .expect("static pattern compiles")
});

/// CAA cell: `Flag: <digits> ... Tag: <alnum> ... Value: <rest>`.
pub(crate) static CAA_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Flag:\s*(\d+).*Tag:\s*([A-Za-z0-9]+).*Value:\s*(.+)$")
        .expect("static pattern compiles")
});

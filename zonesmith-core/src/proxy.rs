//! CDN proxy heuristic.
//!
//! Panel exports carry no proxy information, so the converter guesses from
//! the host name: the apex and ordinary subdomains default to proxied, while
//! service hosts a CDN would break (mail, control-panel endpoints,
//! autodiscovery) and underscore-prefixed names stay unproxied.

/// First labels that must never be proxied.
///
/// This list is a behavioral contract with existing exports; extend it only
/// deliberately.
const NON_PROXY_HOSTS: [&str; 10] = [
    "mail",
    "ftp",
    "cpanel",
    "webmail",
    "webdisk",
    "whm",
    "cpcontacts",
    "cpcalendars",
    "autodiscover",
    "autoconfig",
];

/// Guess whether `name` should sit behind the CDN proxy for `domain`.
///
/// Trailing dots are ignored and the comparison is case-insensitive. Names
/// outside the zone, underscore-prefixed hosts and deny-listed first labels
/// are not proxied; the apex, `www` and everything else is.
#[must_use]
pub fn infer_proxied(name: &str, domain: &str) -> bool {
    let clean = name.strip_suffix('.').unwrap_or(name).to_lowercase();
    let root = domain.strip_suffix('.').unwrap_or(domain).to_lowercase();

    if root.is_empty() {
        return false;
    }
    if clean == root || clean == format!("www.{root}") {
        return true;
    }
    let Some(host) = clean.strip_suffix(&format!(".{root}")) else {
        return false;
    };
    if host.is_empty() || host.starts_with('_') {
        return false;
    }

    let first_label = host.split('.').next().unwrap_or(host);
    !NON_PROXY_HOSTS.contains(&first_label)
}

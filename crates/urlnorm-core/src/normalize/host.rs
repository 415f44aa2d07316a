//! Host normalization: lowercase, root-dot strip, and per-label IDNA.
//!
//! `SITE.COM`, `site.com.`, and Unicode-label hosts must all canonicalize
//! to the same ASCII identifier, the way browsers and crawlers treat them.

use crate::error::NormalizeError;

/// Lowercase `host`, strip surrounding dots, and encode each label to its
/// ASCII-compatible (`xn--`) form with IDNA2008/UTS46 transitional
/// processing. If any label fails, the whole host is retried once through
/// the legacy encoder; only a second failure propagates.
pub fn normalize_host(host: &str) -> Result<String, NormalizeError> {
    let lowered = host.to_lowercase();
    let trimmed = lowered.trim_matches('.');

    let mut encoded = Vec::new();
    for label in trimmed.split('.').filter(|l| !l.is_empty()) {
        match label_to_ascii(label) {
            Ok(ascii) => encoded.push(ascii),
            Err(_) => {
                tracing::debug!("per-label IDNA failed for {trimmed:?}, trying legacy fallback");
                return legacy_to_ascii(trimmed);
            }
        }
    }
    Ok(encoded.join("."))
}

/// UTS46 with transitional processing, STD3 rules off so odd but harmless
/// ASCII (brackets, underscores) passes through like in browsers.
fn label_to_ascii(label: &str) -> Result<String, idna::Errors> {
    idna::Config::default()
        .use_std3_ascii_rules(false)
        .transitional_processing(true)
        .to_ascii(label)
}

fn legacy_to_ascii(host: &str) -> Result<String, NormalizeError> {
    idna::domain_to_ascii(host).map_err(|_| NormalizeError::HostEncoding {
        host: host.to_string(),
    })
}

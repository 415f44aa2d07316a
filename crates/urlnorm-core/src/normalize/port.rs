//! Port normalization: leading-zero trim and default-port elision.

/// Conventional port for a (canonical, lowercase) scheme.
fn default_port(scheme: &str) -> Option<&'static str> {
    match scheme {
        "ftp" => Some("21"),
        "telnet" => Some("23"),
        "gopher" => Some("70"),
        "http" | "ws" => Some("80"),
        "news" | "nntp" => Some("119"),
        "https" | "wss" => Some("443"),
        "snews" | "snntp" => Some("563"),
        _ => None,
    }
}

/// Normalize away leading zeros and elide the scheme's default port.
/// Non-numeric ports pass through verbatim; this never fails.
pub fn normalize_port(port: &str, scheme: &str) -> String {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return port.to_string();
    }
    let trimmed = port.trim_start_matches('0');
    let canonical = if trimmed.is_empty() { "0" } else { trimmed };
    if default_port(scheme) == Some(canonical) {
        String::new()
    } else {
        canonical.to_string()
    }
}

//! Pre-pass cleanup applied to the whole string before decomposition:
//! scheme and domain provisioning, shebang rewrite, tracking-parameter
//! removal, and trailing separator trim.

/// Attach `default_scheme` to scheme-less URLs.
///
/// Left unchanged: empty input, the stdin marker `-`, anything with a `:`
/// in its first seven characters (already schemed), and bare absolute file
/// paths (`/...` but not `//...`). Scheme-relative `//host` gets
/// `default_scheme:` prepended; a bare `host/path` gets `default_scheme://`.
pub fn provide_scheme(url: &str, default_scheme: &str) -> String {
    let has_scheme = url.chars().take(7).any(|c| c == ':');
    let is_universal = url.starts_with("//");
    let is_file_path = url == "-" || (url.starts_with('/') && !is_universal);
    if url.is_empty() || has_scheme || is_file_path {
        return url.to_string();
    }
    if is_universal {
        format!("{default_scheme}:{url}")
    } else {
        format!("{default_scheme}://{url}")
    }
}

/// Attach `default_domain` to host-less absolute paths (`/path` becomes
/// `//domain/path`). Relative paths, already-absolute URLs, empty input,
/// and `-` pass through unchanged.
pub fn provide_domain(url: &str, default_domain: &str) -> String {
    if url.is_empty()
        || url == "-"
        || url.contains("://")
        || url.starts_with("//")
        || !url.starts_with('/')
    {
        return url.to_string();
    }
    format!("//{default_domain}{url}")
}

/// Generic cleanup on the raw string.
///
/// The `#!` rewrite runs first: it can introduce the `?` that turns the
/// remainder into a query, which the `utm_source` stripper then sees.
pub fn generic_cleanup(url: &str) -> String {
    let rewritten = url.replace("#!", "?_escaped_fragment_=");
    let stripped = strip_utm_source(&rewritten);
    stripped.trim_end_matches(&['&', '?', ' '][..]).to_string()
}

/// Remove every `utm_source=<value>` occurrence (value runs to the next
/// `&` or end of string, and must be non-empty), together with an
/// immediately following `&`.
fn strip_utm_source(url: &str) -> String {
    const MARKER: &str = "utm_source=";
    let mut out = String::with_capacity(url.len());
    let mut rest = url;
    while let Some(pos) = rest.find(MARKER) {
        let after = &rest[pos + MARKER.len()..];
        let value_len = after.find('&').unwrap_or(after.len());
        if value_len == 0 {
            // Empty value: not a match, keep scanning past the marker.
            out.push_str(&rest[..pos + MARKER.len()]);
            rest = after;
            continue;
        }
        let mut end = pos + MARKER.len() + value_len;
        if rest[end..].starts_with('&') {
            end += 1;
        }
        out.push_str(&rest[..pos]);
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

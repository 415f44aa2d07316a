//! Path normalization: percent-encoding canonicalization plus dot-segment
//! resolution for hierarchical schemes.

use crate::codec;
use crate::url_model::is_hierarchical;

/// Canonicalize the percent-encoding of `path` and, for hierarchical
/// schemes (including the empty scheme), resolve `.` and `..` segments.
/// A stray `..` never pops above the root. Opaque-scheme paths skip
/// dot-segment resolution entirely.
pub fn normalize_path(path: &str, scheme: &str) -> String {
    let path = codec::encode(&codec::decode_nfc(path), codec::PATH_ESCAPE);
    if !scheme.is_empty() && !is_hierarchical(scheme) {
        return path;
    }

    let mut output: Vec<&str> = Vec::new();
    let mut last = "";
    for part in path.split('/') {
        last = part;
        match part {
            "" => {
                // Keep a single leading empty segment (absolute-path marker).
                if output.is_empty() {
                    output.push(part);
                }
            }
            "." => {}
            ".." => {
                if output.len() > 1 {
                    output.pop();
                }
            }
            _ => output.push(part),
        }
    }
    if matches!(last, "" | "." | "..") {
        output.push("");
    }
    let resolved = output.join("/");

    // Empty path is equivalent to the root path for these schemes.
    if resolved.is_empty() && is_hierarchical(scheme) {
        "/".to_string()
    } else {
        resolved
    }
}

//! Query normalization: pair splitting, per-side re-encoding, optional
//! lexicographic sort.

use crate::codec;

/// Normalize `query`: drop empty `&`-separated segments, split each pair on
/// the first `=` only, canonicalize the percent-encoding of each side, and
/// sort the pair strings when `sort_query_params` is set.
pub fn normalize_query(query: &str, sort_query_params: bool) -> String {
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => format!("{}={}", requote(key), requote(value)),
            None => requote(segment),
        })
        .collect();
    if sort_query_params {
        pairs.sort();
    }
    pairs.join("&")
}

fn requote(part: &str) -> String {
    codec::encode(&codec::decode_nfc(part), codec::QUERY_ESCAPE)
}

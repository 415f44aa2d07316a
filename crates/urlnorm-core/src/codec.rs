//! Percent-encoding primitives shared by the per-component normalizers.
//!
//! The decode/re-encode round trip must keep raw and escaped delimiters
//! distinct: `%3F` in a path stays `%3F`, while a decoded `~` comes out
//! bare. Decoding therefore leaves RFC 3986 reserved delimiters (and `%`
//! itself) escaped, uppercasing their hex digits, and re-encoding passes
//! surviving `%XX` triplets through verbatim.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use unicode_normalization::UnicodeNormalization;

/// Bytes whose percent-escapes survive decoding. Decoding these would erase
/// the difference between a delimiter and its escaped form.
const KEEP_ESCAPED: &[u8] = b"%:/?#[]@!$&'()*+,;=";

/// Everything except ASCII alphanumerics and the always-unreserved `-._~`.
const BASE: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escape set for paths: safe chars are `~:/?#[]@!$&'()*+,;=`.
pub const PATH_ESCAPE: &AsciiSet = &BASE
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Escape set for query keys and values: like [`PATH_ESCAPE`] but `&` is
/// escaped so a literal ampersand cannot masquerade as a pair separator.
pub const QUERY_ESCAPE: &AsciiSet = &BASE
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Escape set for fragments: only `~` and `=` stay bare beyond the
/// unreserved characters (`#gid=1234` must survive unescaped).
pub const FRAGMENT_ESCAPE: &AsciiSet = &BASE.remove(b'=');

/// Parse a percent triplet at `bytes[i..]`, returning the decoded byte and
/// the two hex digits as they appeared.
fn triplet_at(bytes: &[u8], i: usize) -> Option<(u8, u8, u8)> {
    if bytes[i] != b'%' || i + 2 >= bytes.len() {
        return None;
    }
    let hi = (bytes[i + 1] as char).to_digit(16)?;
    let lo = (bytes[i + 2] as char).to_digit(16)?;
    Some(((hi * 16 + lo) as u8, bytes[i + 1], bytes[i + 2]))
}

/// Percent-decode `input` and apply Unicode NFC to the decoded text.
///
/// Triplets for reserved delimiters and `%` are kept escaped (hex digits
/// uppercased); invalid UTF-8 in the decoded bytes becomes U+FFFD. Kept
/// triplets bound the NFC runs, so a decoded combining mark can never
/// compose with the hex digits of an escape next to it.
pub fn decode_nfc(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut run: Vec<u8> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match triplet_at(bytes, i) {
            Some((value, hi, lo)) => {
                if KEEP_ESCAPED.contains(&value) {
                    flush_nfc(&mut run, &mut out);
                    out.push('%');
                    out.push(hi.to_ascii_uppercase() as char);
                    out.push(lo.to_ascii_uppercase() as char);
                } else {
                    run.push(value);
                }
                i += 3;
            }
            None => {
                run.push(bytes[i]);
                i += 1;
            }
        }
    }
    flush_nfc(&mut run, &mut out);
    out
}

fn flush_nfc(run: &mut Vec<u8>, out: &mut String) {
    if run.is_empty() {
        return;
    }
    out.extend(String::from_utf8_lossy(run).nfc());
    run.clear();
}

/// Re-encode text produced by [`decode_nfc`]: every byte in `escape` is
/// percent-encoded with uppercase hex, while `%XX` triplets already present
/// pass through verbatim (uppercased).
pub fn encode(decoded: &str, escape: &'static AsciiSet) -> String {
    let bytes = decoded.as_bytes();
    let mut out = String::with_capacity(decoded.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match triplet_at(bytes, i) {
            Some((_, hi, lo)) => {
                out.extend(utf8_percent_encode(&decoded[start..i], escape));
                out.push('%');
                out.push(hi.to_ascii_uppercase() as char);
                out.push(lo.to_ascii_uppercase() as char);
                i += 3;
                start = i;
            }
            None => i += 1,
        }
    }
    out.extend(utf8_percent_encode(&decoded[start..], escape));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_unreserved_triplets() {
        assert_eq!(decode_nfc("%7Ejane"), "~jane");
        assert_eq!(decode_nfc("%7ejane"), "~jane");
        assert_eq!(decode_nfc("a%20b"), "a b");
    }

    #[test]
    fn decode_keeps_reserved_triplets_escaped() {
        assert_eq!(decode_nfc("code%3D123"), "code%3D123");
        assert_eq!(decode_nfc("%23test"), "%23test");
        assert_eq!(decode_nfc("Vicar%3f"), "Vicar%3F");
        assert_eq!(decode_nfc("100%25"), "100%25");
    }

    #[test]
    fn decode_applies_nfc_across_escapes() {
        // 'C' + combining cedilla recomposes to U+00C7.
        assert_eq!(decode_nfc("C%CC%A7"), "\u{c7}");
    }

    #[test]
    fn combining_mark_next_to_kept_escape_does_not_compose() {
        // U+0323 after a kept %5B must not swallow the escape's 'B'.
        let decoded = decode_nfc("%5B%CC%A3");
        assert_eq!(decoded, "%5B\u{323}");
        assert_eq!(encode(&decoded, PATH_ESCAPE), "%5B%CC%A3");
    }

    #[test]
    fn decode_replaces_invalid_utf8() {
        assert_eq!(decode_nfc("%C7"), "\u{fffd}");
    }

    #[test]
    fn encode_escapes_outside_safe_set() {
        assert_eq!(encode("a b", PATH_ESCAPE), "a%20b");
        assert_eq!(encode("\\", QUERY_ESCAPE), "%5C");
        assert_eq!(encode("!fragment", FRAGMENT_ESCAPE), "%21fragment");
        assert_eq!(encode("gid=1234", FRAGMENT_ESCAPE), "gid=1234");
    }

    #[test]
    fn encode_passes_kept_triplets_verbatim() {
        assert_eq!(encode("code%3D123", QUERY_ESCAPE), "code%3D123");
        assert_eq!(encode("More+Tea+Vicar%3F", PATH_ESCAPE), "More+Tea+Vicar%3F");
    }

    #[test]
    fn encode_escapes_stray_percent() {
        assert_eq!(encode("100%", PATH_ESCAPE), "100%25");
    }

    #[test]
    fn round_trip_is_stable() {
        for input in ["q=%5C", "%C3%87", "~jane", "%EF%BF%BD"] {
            let once = encode(&decode_nfc(input), QUERY_ESCAPE);
            let twice = encode(&decode_nfc(&once), QUERY_ESCAPE);
            assert_eq!(once, twice, "{input}");
        }
    }
}

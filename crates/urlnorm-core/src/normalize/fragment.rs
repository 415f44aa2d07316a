//! Fragment normalization.

use crate::codec;

/// Canonicalize the percent-encoding of `fragment`. Besides the unreserved
/// characters only `~` and `=` stay bare, so anchors like `gid=1234`
/// survive untouched.
pub fn normalize_fragment(fragment: &str) -> String {
    codec::encode(&codec::decode_nfc(fragment), codec::FRAGMENT_ESCAPE)
}

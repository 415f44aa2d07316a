//! The normalization pipeline: one public entry point sequencing the
//! pre-pass, decomposition, the seven per-component normalizers, optional
//! parameter filtering, and reconstruction.

mod fragment;
mod host;
mod path;
mod port;
mod query;
mod scheme;
mod userinfo;

pub use fragment::normalize_fragment;
pub use host::normalize_host;
pub use path::normalize_path;
pub use port::normalize_port;
pub use query::normalize_query;
pub use scheme::normalize_scheme;
pub use userinfo::normalize_userinfo;

use crate::config::NormalizeOptions;
use crate::error::NormalizeError;
use crate::filter::filter_query_params;
use crate::prepass::{generic_cleanup, provide_domain, provide_scheme};
use crate::url_model::{decompose, reconstruct, Url};

/// Normalize `url` into its canonical textual form.
///
/// Empty input is returned unchanged. The only propagating error is a host
/// that cannot be encoded to ASCII; every other oddity normalizes
/// best-effort, mirroring browser URL-bar behavior.
///
/// Port and path are normalized in a second pass because their rules key
/// on the already-canonical lowercase scheme.
pub fn url_normalize(url: &str, options: &NormalizeOptions) -> Result<String, NormalizeError> {
    if url.is_empty() {
        return Ok(String::new());
    }

    let mut working = match &options.default_domain {
        Some(domain) => provide_domain(url, domain),
        None => url.to_string(),
    };
    working = provide_scheme(&working, &options.default_scheme);
    working = generic_cleanup(&working);
    let parts = decompose(&working);

    let host = normalize_host(&parts.host)?;
    let query = if options.filter_params {
        let kept = filter_query_params(&parts.query, &host, options.param_allowlist.as_ref());
        normalize_query(&kept, options.sort_query_params)
    } else {
        normalize_query(&parts.query, options.sort_query_params)
    };

    let url = Url {
        scheme: normalize_scheme(&parts.scheme),
        userinfo: normalize_userinfo(&parts.userinfo),
        host,
        query,
        fragment: normalize_fragment(&parts.fragment),
        port: parts.port,
        path: parts.path,
    };
    let url = Url {
        port: normalize_port(&url.port, &url.scheme),
        path: normalize_path(&url.path, &url.scheme),
        ..url
    };

    let result = reconstruct(&url);
    tracing::debug!("normalized {working:?} -> {result}");
    Ok(result)
}

#[cfg(test)]
mod tests;

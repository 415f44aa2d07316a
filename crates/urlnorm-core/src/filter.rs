//! Optional query-parameter filtering against a per-host allowlist.
//!
//! Enabled filtering with no matching policy drops every parameter: the
//! point is stripping tracking and ad parameters from unrecognized hosts
//! too, so the conservative default wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Allowed parameter names, either one set for every host or a per-host
/// table keyed by exact host name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamAllowlist {
    /// The same allowed names apply to every host.
    Flat(Vec<String>),
    /// Host name to allowed names. Lookups also try the host with a
    /// leading `www.` stripped.
    PerHost(HashMap<String, Vec<String>>),
}

/// Allowed names for well-known hosts, used when the caller enables
/// filtering without supplying an allowlist.
fn builtin_allowed(host: &str) -> &'static [&'static str] {
    match host {
        "google.com" => &["q", "ie"],
        "baidu.com" => &["wd", "ie"],
        "youtube.com" => &["v", "search_query"],
        "bing.com" => &["q"],
        "yahoo.com" => &["p"],
        "duckduckgo.com" => &["q"],
        "yandex.com" => &["text"],
        _ => &[],
    }
}

/// Drop query pairs whose key is not allowed for `host`, preserving the
/// relative order of the survivors. `host` should already be canonical
/// (lowercase, ASCII).
pub fn filter_query_params(query: &str, host: &str, allowlist: Option<&ParamAllowlist>) -> String {
    let bare_host = host.strip_prefix("www.").unwrap_or(host);
    let allowed: Vec<&str> = match allowlist {
        Some(ParamAllowlist::Flat(names)) => names.iter().map(String::as_str).collect(),
        Some(ParamAllowlist::PerHost(table)) => table
            .get(host)
            .or_else(|| table.get(bare_host))
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default(),
        None => builtin_allowed(bare_host).to_vec(),
    };

    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let key = segment.split_once('=').map_or(*segment, |(k, _)| k);
            allowed.contains(&key)
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_host(entries: &[(&str, &[&str])]) -> ParamAllowlist {
        ParamAllowlist::PerHost(
            entries
                .iter()
                .map(|(host, names)| {
                    (
                        host.to_string(),
                        names.iter().map(|n| n.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn per_host_table_preserves_order() {
        let allowlist = per_host(&[("example.com", &["page", "id"])]);
        assert_eq!(
            filter_query_params("page=1&id=123&utm_medium=x", "example.com", Some(&allowlist)),
            "page=1&id=123"
        );
    }

    #[test]
    fn flat_list_applies_to_any_host() {
        let allowlist = ParamAllowlist::Flat(vec!["ie".into(), "qq".into()]);
        assert_eq!(
            filter_query_params("qq=test&ie=utf8&ref=x", "anything.example", Some(&allowlist)),
            "qq=test&ie=utf8"
        );
    }

    #[test]
    fn www_prefix_is_stripped_for_lookup() {
        let allowlist = per_host(&[("google.com", &["q"])]);
        assert_eq!(
            filter_query_params("q=test&ref=x", "www.google.com", Some(&allowlist)),
            "q=test"
        );
    }

    #[test]
    fn unknown_host_drops_everything() {
        let allowlist = per_host(&[("example.com", &["keep"])]);
        assert_eq!(
            filter_query_params("a=1&b=2", "example.org", Some(&allowlist)),
            ""
        );
        assert_eq!(filter_query_params("a=1&b=2", "example.org", None), "");
    }

    #[test]
    fn builtin_table_covers_known_hosts() {
        assert_eq!(
            filter_query_params("q=test&ref=x&ie=utf8", "www.google.com", None),
            "q=test&ie=utf8"
        );
        assert_eq!(
            filter_query_params("v=12345&feature=share&search_query=t", "youtube.com", None),
            "v=12345&search_query=t"
        );
        assert_eq!(
            filter_query_params("wd=test&tn=x", "www.baidu.com", None),
            "wd=test"
        );
    }

    #[test]
    fn valueless_keys_filter_by_name() {
        let allowlist = ParamAllowlist::Flat(vec!["flag".into()]);
        assert_eq!(
            filter_query_params("flag&other", "h.example", Some(&allowlist)),
            "flag"
        );
    }
}

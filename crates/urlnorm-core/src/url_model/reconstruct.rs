//! Reassembling the seven components into a single URL string.

use super::Url;

/// Structural inverse of [`super::decompose`]. The `//` authority marker is
/// emitted only when there is an authority (or the path itself starts with
/// `//`), so opaque URLs like `mailto:...` never gain a spurious one.
pub fn reconstruct(url: &Url) -> String {
    let mut authority = format!("{}{}", url.userinfo, url.host);
    if !url.port.is_empty() {
        authority.push(':');
        authority.push_str(&url.port);
    }

    let mut out = String::new();
    if !url.scheme.is_empty() {
        out.push_str(&url.scheme);
        out.push(':');
    }
    if !authority.is_empty() || url.path.starts_with("//") {
        out.push_str("//");
        out.push_str(&authority);
        if !url.path.is_empty() && !url.path.starts_with('/') {
            out.push('/');
        }
    }
    out.push_str(&url.path);
    if !url.query.is_empty() {
        out.push('?');
        out.push_str(&url.query);
    }
    if !url.fragment.is_empty() {
        out.push('#');
        out.push_str(&url.fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_only() {
        let url = Url {
            scheme: "http".into(),
            host: "site.com".into(),
            ..Url::default()
        };
        assert_eq!(reconstruct(&url), "http://site.com");
    }

    #[test]
    fn all_components() {
        let url = Url {
            scheme: "http".into(),
            userinfo: "user@".into(),
            host: "www.example.com".into(),
            port: "8080".into(),
            path: "/path/index.html".into(),
            query: "param=val".into(),
            fragment: "fragment".into(),
        };
        assert_eq!(
            reconstruct(&url),
            "http://user@www.example.com:8080/path/index.html?param=val#fragment"
        );
    }

    #[test]
    fn opaque_scheme_has_no_authority_marker() {
        let url = Url {
            scheme: "mailto".into(),
            path: "John.Doe@example.com".into(),
            ..Url::default()
        };
        assert_eq!(reconstruct(&url), "mailto:John.Doe@example.com");
    }

    #[test]
    fn relative_path_after_authority_gains_separator() {
        let url = Url {
            scheme: "http".into(),
            host: "example.com".into(),
            path: "a/b".into(),
            ..Url::default()
        };
        assert_eq!(reconstruct(&url), "http://example.com/a/b");
    }
}

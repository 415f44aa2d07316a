//! Userinfo normalization.

/// Collapse an empty username/password (`@` or `:@`) to nothing.
/// Real credentials are never case-folded or re-encoded.
pub fn normalize_userinfo(userinfo: &str) -> String {
    if userinfo == "@" || userinfo == ":@" {
        String::new()
    } else {
        userinfo.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_collapse() {
        assert_eq!(normalize_userinfo("@"), "");
        assert_eq!(normalize_userinfo(":@"), "");
    }

    #[test]
    fn real_credentials_untouched() {
        assert_eq!(normalize_userinfo("user@"), "user@");
        assert_eq!(normalize_userinfo("USER:Pass@"), "USER:Pass@");
        assert_eq!(normalize_userinfo(""), "");
    }
}

//! Scheme normalization: lowercase, nothing else.

pub fn normalize_scheme(scheme: &str) -> String {
    scheme.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_only() {
        assert_eq!(normalize_scheme("HTTP"), "http");
        assert_eq!(normalize_scheme("https"), "https");
        assert_eq!(normalize_scheme(""), "");
    }
}

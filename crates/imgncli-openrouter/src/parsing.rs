//! Data URI parsing.

use std::sync::LazyLock;

use regex::Regex;

static DATA_URI: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:image/\w+;base64,(.+)$").ok());

/// Extract the base64 payload from `data:image/<subtype>;base64,<payload>`.
pub(crate) fn extract_base64_payload(url: &str) -> Option<&str> {
    DATA_URI
        .as_ref()?
        .captures(url)?
        .get(1)
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_payload() {
        assert_eq!(
            extract_base64_payload("data:image/png;base64,QQ=="),
            Some("QQ==")
        );
    }

    #[test]
    fn test_other_subtypes() {
        assert_eq!(
            extract_base64_payload("data:image/jpeg;base64,/9j/4AAQ"),
            Some("/9j/4AAQ")
        );
    }

    #[test]
    fn test_rejects_non_data_uris() {
        assert_eq!(extract_base64_payload("not-a-data-url"), None);
        assert_eq!(extract_base64_payload("https://cdn.example/x.png"), None);
        assert_eq!(extract_base64_payload("data:text/plain;base64,QQ=="), None);
        assert_eq!(extract_base64_payload("data:image/png;base64,"), None);
        assert_eq!(extract_base64_payload("data:image/svg+xml;base64,QQ=="), None);
    }
}

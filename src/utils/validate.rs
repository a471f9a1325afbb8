//! Input validation for the interactive flows.

/// Structural e-mail check: exactly one `@`, a non-empty local part and a
/// domain of at least two non-empty dot-separated labels, no whitespace.
pub fn email(input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = input.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// A link is valid when it parses as an absolute http(s) URL.
pub fn url(input: &str) -> bool {
    match url::Url::parse(input.trim()) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- email ---

    #[test]
    fn accepts_plain_addresses() {
        assert!(email("ana@example.com"));
        assert!(email("joao.silva@mail.example.org"));
        assert!(email("  ana@example.com  "));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!email(""));
        assert!(!email("ana"));
        assert!(!email("@example.com"));
        assert!(!email("ana@"));
        assert!(!email("ana@example"));
    }

    #[test]
    fn rejects_malformed_domains() {
        assert!(!email("ana@example..com"));
        assert!(!email("ana@.com"));
        assert!(!email("ana@example.com."));
        assert!(!email("ana@exa mple.com"));
        assert!(!email("ana@b@c.com"));
    }

    // --- url ---

    #[test]
    fn accepts_http_and_https() {
        assert!(url("https://airbnb.com/rooms/123"));
        assert!(url("http://example.com"));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(!url("ftp://example.com"));
        assert!(!url("airbnb.com"));
        assert!(!url("not a url"));
        assert!(!url(""));
    }
}

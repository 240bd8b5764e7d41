use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
];

/// Header set of a desktop browser, sent to HTML pages that tend to block
/// obvious bots.
pub(crate) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    for &(name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_USER_AGENT));

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_headers_identify_as_desktop_chrome() {
        let headers = browser_headers();
        let ua = headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.contains("Chrome"));
        assert!(!ua.contains("Mobile"));
    }

    #[test]
    fn test_browser_headers_include_accept_set() {
        let headers = browser_headers();
        assert_eq!(headers.len(), BROWSER_HEADERS.len() + 1);
        assert!(headers.contains_key("accept"));
        assert_eq!(
            headers
                .get("accept-language")
                .and_then(|v| v.to_str().ok()),
            Some("en-US,en;q=0.9")
        );
    }
}

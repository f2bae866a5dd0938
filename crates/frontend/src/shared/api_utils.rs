//! Helpers for building backend URLs

/// Port of the `trunk serve` dev server
const DEV_SERVER_PORT: &str = "8080";

/// Port the backend listens on by default (`[server] port` in config.toml)
const BACKEND_PORT: &str = "3000";

/// Base URL for a page at `origin`.
///
/// Under the dev server the backend runs on the same host on port 3000.
/// Otherwise the page was served by the backend and its origin is reused,
/// whatever port the backend was configured with.
fn base_for_location(origin: &str, protocol: &str, hostname: &str, port: &str) -> String {
    if port == DEV_SERVER_PORT {
        format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
    } else {
        origin.trim_end_matches('/').to_string()
    }
}

/// Base URL for API requests.
///
/// Returns an empty string when there is no window (tests, workers).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    base_for_location(&origin, &protocol, &hostname, &port)
}

/// Append a query string built from `pairs`, skipping empty values
pub fn with_query<'a>(url: String, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let query: Vec<String> = pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();

    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_encodes_and_skips_empty() {
        let url = with_query(
            "/api/entity/courses".to_string(),
            [("search", "rust & co"), ("status", ""), ("level", "beginner")],
        );
        assert_eq!(url, "/api/entity/courses?search=rust%20%26%20co&level=beginner");
    }

    #[test]
    fn test_base_for_dev_server_points_at_backend() {
        assert_eq!(
            base_for_location("http://localhost:8080", "http:", "localhost", "8080"),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_base_reuses_origin_when_served_by_backend() {
        assert_eq!(
            base_for_location("http://admin.local:9000", "http:", "admin.local", "9000"),
            "http://admin.local:9000"
        );
        assert_eq!(
            base_for_location("https://admin.example.com", "https:", "admin.example.com", ""),
            "https://admin.example.com"
        );
    }

    #[test]
    fn test_with_query_without_pairs() {
        assert_eq!(with_query("/api/schema".to_string(), []), "/api/schema");
    }
}

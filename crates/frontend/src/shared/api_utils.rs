//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Production origin of the TelcoNova REST API
pub const DEFAULT_API_BASE: &str = "https://telconovaf2api.onrender.com";

/// Get the base URL for API requests
///
/// Uses the compile-time `TELCONOVA_API_BASE` variable when the bundle is built
/// against another environment, otherwise the production origin.
/// A trailing slash is dropped.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/orders/{}", api_base(), id);
/// ```
pub fn api_base() -> &'static str {
    let base = option_env!("TELCONOVA_API_BASE")
        .filter(|b| !b.trim().is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders/all");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url(DEFAULT_API_BASE, "/api/orders/all"),
            "https://telconovaf2api.onrender.com/api/orders/all"
        );
        assert_eq!(join_url("http://localhost:8080", "api/x"), "http://localhost:8080/api/x");
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_url("/api/auth/login").ends_with("/api/auth/login"));
    }
}

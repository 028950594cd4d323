//! Cross-origin access for browser widgets.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Parses `*` or a comma-separated origin list.
///
/// An empty result means any origin is allowed.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid origin '{origin}'"))
        })
        .collect()
}

/// Read-only CORS policy: any method and header, no credentials.
pub fn layer(origins: Vec<HeaderValue>) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_means_any() {
        assert!(parse_origins("*").unwrap().is_empty());
        assert!(parse_origins("").unwrap().is_empty());
    }

    #[test]
    fn test_origin_list() {
        let origins = parse_origins("https://a.example, https://b.example,").unwrap();

        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://b.example");
    }

    #[test]
    fn test_invalid_origin() {
        assert!(parse_origins("https://ok.example,bad\norigin").is_err());
    }
}

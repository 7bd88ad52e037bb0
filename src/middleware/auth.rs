//! Bearer token extraction for the GraphQL handler
//!
//! Token verification itself lives in the credential service; this
//! module only pulls the raw token out of the Authorization header.
//! A missing or malformed header is not an error: the request simply
//! proceeds without an identity.

use axum::http::{header, HeaderMap};

/// Extract the bearer token from the Authorization header
///
/// The scheme is matched case-insensitively and values with trailing
/// garbage ("Bearer <token> <extra>") are rejected.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token_valid() {
        let headers = headers_with_auth("Bearer test_token_123");
        assert_eq!(extract_bearer_token(&headers), Some("test_token_123"));
    }

    #[test]
    fn test_extract_bearer_token_case_insensitive_scheme() {
        let headers = headers_with_auth("bearer test_token_123");
        assert_eq!(extract_bearer_token(&headers), Some("test_token_123"));
    }

    #[test]
    fn test_extract_bearer_token_missing() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_invalid_scheme() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_rejects_trailing_parts() {
        let headers = headers_with_auth("Bearer token extra");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}

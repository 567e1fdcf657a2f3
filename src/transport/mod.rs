//! Transport module
//!
//! Defines the Transport trait and the HTTP implementation

pub mod http;

use crate::utils::error::MomoResult;
use async_trait::async_trait;
use serde_json::Value;

/// Subscription key header name
pub const HEADER_SUBSCRIPTION_KEY: &str = "Ocp-Apim-Subscription-Key";
/// Reference id header name
pub const HEADER_REFERENCE_ID: &str = "X-Reference-Id";
/// Target environment header name
pub const HEADER_TARGET_ENVIRONMENT: &str = "X-Target-Environment";

/// A raw transport outcome: status code plus the unparsed body
pub type RawResponse = (u16, String);

/// Transport trait for issuing API requests
///
/// Implementations prepend their configured base URL to `path`. The real
/// client uses [`http::HttpTransport`]; tests inject doubles through the
/// same seam instead of overriding any global state.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a POST with a JSON body
    async fn post(
        &self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> MomoResult<RawResponse>;

    /// Issue a GET
    async fn get(&self, path: &str, headers: &[(String, String)]) -> MomoResult<RawResponse>;
}

/// Decode a raw response body leniently
///
/// Empty bodies become an empty map, JSON bodies are parsed, and anything
/// else is carried as the raw string. Never fails.
pub fn decode_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub use http::HttpTransport;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_body_empty() {
        assert_eq!(decode_body(""), json!({}));
        assert_eq!(decode_body("   "), json!({}));
    }

    #[test]
    fn test_decode_body_json() {
        assert_eq!(
            decode_body(r#"{"availableBalance":"1000","currency":"UGX"}"#),
            json!({"availableBalance": "1000", "currency": "UGX"})
        );
    }

    #[test]
    fn test_decode_body_malformed_falls_back_to_raw() {
        assert_eq!(
            decode_body("<html>Bad Gateway</html>"),
            json!("<html>Bad Gateway</html>")
        );
    }
}

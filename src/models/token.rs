//! Token endpoint models
//!
//! Defines the response structure of the per-service token exchange

use serde::{Deserialize, Serialize};

/// Successful token exchange response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token
    pub access_token: String,
    /// Token type, normally `access_token` (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Token lifetime in seconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

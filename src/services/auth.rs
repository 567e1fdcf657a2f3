//! Token exchange
//!
//! Swaps long-lived credentials for a short-lived bearer token. Every
//! operation re-authenticates; no token is cached or refreshed here.

use super::Service;
use crate::config::Config;
use crate::models::token::TokenResponse;
use crate::transport::{decode_body, Transport, HEADER_SUBSCRIPTION_KEY};
use crate::utils::error::{MomoError, MomoResult};
use base64::Engine;
use serde_json::Value;
use tracing::{debug, warn};

/// Build the Basic credential from the provisioned user id and API key
pub fn basic_credential(config: &Config) -> String {
    let raw = format!("{}:{}", config.user_id, config.api_key);
    base64::engine::general_purpose::STANDARD.encode(raw)
}

/// Obtain a bearer token for one service
///
/// POSTs to the service token endpoint with Basic authentication. A 200
/// yields the `access_token` from the body; any other status is surfaced
/// as [`MomoError::AuthFailed`] with the decoded body attached.
pub async fn get_token(
    service: Service,
    config: &Config,
    transport: &dyn Transport,
) -> MomoResult<String> {
    debug!(service = service.name(), "requesting access token");

    let headers = vec![
        (
            "Authorization".to_string(),
            format!("Basic {}", basic_credential(config)),
        ),
        (
            HEADER_SUBSCRIPTION_KEY.to_string(),
            config.subscription_key.clone(),
        ),
    ];

    let (status, raw_body) = transport
        .post(service.token_path(), &Value::Object(Default::default()), &headers)
        .await?;

    let body = decode_body(&raw_body);

    if status != 200 {
        warn!(service = service.name(), status, "token exchange failed");
        return Err(MomoError::AuthFailed { status, body });
    }

    match serde_json::from_value::<TokenResponse>(body.clone()) {
        Ok(token) => Ok(token.access_token),
        Err(_) => {
            warn!(service = service.name(), "token response missing access_token");
            Err(MomoError::TokenDecode { body })
        }
    }
}

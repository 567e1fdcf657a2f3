//! Shared request pipeline
//!
//! Both services run the same short-circuiting chain:
//! validate → authenticate → correlate → dispatch → interpret.
//! A failure at any stage is terminal; later stages never run.

use super::{auth, validator, Service};
use crate::config::Config;
use crate::transport::{
    decode_body, HttpTransport, Transport, HEADER_REFERENCE_ID, HEADER_SUBSCRIPTION_KEY,
    HEADER_TARGET_ENVIRONMENT,
};
use crate::utils::error::{MomoError, MomoResult};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Per-service client core shared by Collections and Disbursements
#[derive(Clone)]
pub(crate) struct ServiceClient {
    service: Service,
    config: Config,
    transport: Arc<dyn Transport>,
}

impl ServiceClient {
    /// Create a client with the real HTTP transport for the config's environment
    pub(crate) fn new(service: Service, config: Config) -> Result<Self> {
        let transport = HttpTransport::for_environment(config.target_environment)?;
        Ok(Self::with_transport(service, config, Arc::new(transport)))
    }

    /// Create a client around an injected transport
    pub(crate) fn with_transport(
        service: Service,
        config: Config,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            service,
            config,
            transport,
        }
    }

    fn headers(&self, token: &str, reference_id: Option<&str>) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {token}")),
            (
                HEADER_SUBSCRIPTION_KEY.to_string(),
                self.config.subscription_key.clone(),
            ),
            (
                HEADER_TARGET_ENVIRONMENT.to_string(),
                self.config.target_environment.as_str().to_string(),
            ),
        ];
        if let Some(reference_id) = reference_id {
            headers.push((HEADER_REFERENCE_ID.to_string(), reference_id.to_string()));
        }
        headers
    }

    /// Run a mutating call: validate the body, then POST it
    ///
    /// Returns the freshly generated reference id on a 202; the id doubles
    /// as the idempotency header value and the handle for status polling.
    pub(crate) async fn send_mutation<T: Serialize>(
        &self,
        path: &str,
        request: &T,
    ) -> MomoResult<String> {
        self.config.validate()?;

        let body = serde_json::to_value(request)?;
        validator::validate(&body, self.service.party_field()).map_err(MomoError::Validation)?;

        let token = auth::get_token(self.service, &self.config, self.transport.as_ref()).await?;

        let reference_id = Uuid::new_v4().to_string();
        let headers = self.headers(&token, Some(&reference_id));

        debug!(service = self.service.name(), path, %reference_id, "dispatching mutating call");
        let (status, raw_body) = self.transport.post(path, &body, &headers).await?;

        if status == 202 {
            Ok(reference_id)
        } else {
            warn!(service = self.service.name(), path, status, "mutating call rejected");
            Err(MomoError::RequestFailed {
                status,
                body: decode_body(&raw_body),
            })
        }
    }

    /// Run a read call and hand back the decoded body on a 200
    pub(crate) async fn send_read(
        &self,
        path: &str,
        reference_id: Option<&str>,
    ) -> MomoResult<Value> {
        self.config.validate()?;

        let token = auth::get_token(self.service, &self.config, self.transport.as_ref()).await?;
        let headers = self.headers(&token, reference_id);

        debug!(service = self.service.name(), path, "dispatching read call");
        let (status, raw_body) = self.transport.get(path, &headers).await?;

        let body = decode_body(&raw_body);
        if status == 200 {
            Ok(body)
        } else {
            warn!(service = self.service.name(), path, status, "read call rejected");
            Err(MomoError::RequestFailed { status, body })
        }
    }
}

//! Disbursements client
//!
//! Pushes transfers and deposits to a payee's mobile-money account

use super::client::ServiceClient;
use super::Service;
use crate::config::Config;
use crate::models::request::PartyIdType;
use crate::transport::Transport;
use crate::utils::error::MomoResult;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Client for the Disbursements API
///
/// Stateless; every operation runs its own validate → authenticate →
/// request pipeline, so a single instance is safe to share across tasks.
#[derive(Clone)]
pub struct Disbursements {
    client: ServiceClient,
}

impl Disbursements {
    /// Create a client against the environment selected by the config
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::new(Service::Disbursements, config)?,
        })
    }

    /// Create a client around an injected transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: ServiceClient::with_transport(Service::Disbursements, config, transport),
        }
    }

    /// Transfer an amount to a payee
    ///
    /// The body must carry `amount`, `currency`, `externalId` and a `payee`
    /// party. Returns the generated reference id to poll the transaction
    /// status with.
    pub async fn transfer<T: Serialize>(&self, request: &T) -> MomoResult<String> {
        self.client
            .send_mutation("/disbursement/v1_0/transfer", request)
            .await
    }

    /// Deposit an amount to a payee's account
    pub async fn deposit<T: Serialize>(&self, request: &T) -> MomoResult<String> {
        self.client
            .send_mutation("/disbursement/v1_0/deposit", request)
            .await
    }

    /// Get the balance of the disbursements account
    pub async fn get_balance(&self) -> MomoResult<Value> {
        self.client
            .send_read("/disbursement/v1_0/account/balance", None)
            .await
    }

    /// Look up the status of a transfer by its reference id
    pub async fn get_transaction_status(&self, reference_id: &str) -> MomoResult<Value> {
        let path = format!("/disbursement/v1_0/transfer/{reference_id}");
        self.client.send_read(&path, Some(reference_id)).await
    }

    /// Get basic personal information of an account holder
    pub async fn get_basic_user_info(
        &self,
        id_type: PartyIdType,
        account_holder_id: &str,
    ) -> MomoResult<Value> {
        let path = format!(
            "/disbursement/v1_0/accountholder/{}/{}/basicuserinfo",
            id_type.as_url_segment(),
            account_holder_id
        );
        self.client.send_read(&path, None).await
    }

    /// Check whether an account holder is registered and active
    pub async fn validate_account_holder_status(
        &self,
        id_type: PartyIdType,
        account_holder_id: &str,
    ) -> MomoResult<Value> {
        let path = format!(
            "/disbursement/v1_0/accountholder/{}/{}/active",
            id_type.as_url_segment(),
            account_holder_id
        );
        self.client.send_read(&path, None).await
    }
}

//! Service layer module
//!
//! Contains the validator, token exchange, and the Collections and Disbursements clients

pub mod auth;
pub(crate) mod client;
pub mod collections;
pub mod disbursements;
pub mod validator;

use validator::PartyField;

/// The two functional areas of the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Pulling payments from consumers
    Collections,
    /// Pushing payments to payees
    Disbursements,
}

impl Service {
    /// Service name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Service::Collections => "collections",
            Service::Disbursements => "disbursements",
        }
    }

    /// URL prefix of the service's endpoints
    pub fn api_prefix(&self) -> &'static str {
        match self {
            Service::Collections => "collection",
            Service::Disbursements => "disbursement",
        }
    }

    /// Path of the service's token endpoint
    pub fn token_path(&self) -> &'static str {
        match self {
            Service::Collections => "/collection/token/",
            Service::Disbursements => "/disbursement/token/",
        }
    }

    /// Counterpart field the validator checks for this service
    pub(crate) fn party_field(&self) -> PartyField {
        match self {
            Service::Collections => PartyField::Payer,
            Service::Disbursements => PartyField::Payee,
        }
    }
}

pub use collections::Collections;
pub use disbursements::Disbursements;

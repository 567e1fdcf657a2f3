//! Payment and transfer request models
//!
//! Typed builders for the request bodies accepted by Collections and
//! Disbursements; they serialize to the exact wire shape the validator
//! checks, so callers can use these or raw `serde_json` maps interchangeably.

use serde::{Deserialize, Serialize};

/// Identifier scheme for a party account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyIdType {
    /// Mobile phone number
    #[serde(rename = "MSISDN")]
    Msisdn,
    /// Email address
    #[serde(rename = "EMAIL")]
    Email,
    /// Provider-specific party code
    #[serde(rename = "PARTY_CODE")]
    PartyCode,
}

impl PartyIdType {
    /// Wire value used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "MSISDN",
            PartyIdType::Email => "EMAIL",
            PartyIdType::PartyCode => "PARTY_CODE",
        }
    }

    /// Lowercase form used in account-holder URL paths
    pub fn as_url_segment(&self) -> &'static str {
        match self {
            PartyIdType::Msisdn => "msisdn",
            PartyIdType::Email => "email",
            PartyIdType::PartyCode => "party_code",
        }
    }
}

/// Counterpart account: payer for Collections, payee for Disbursements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Identifier scheme
    pub party_id_type: PartyIdType,
    /// Account identifier under that scheme
    pub party_id: String,
}

impl Party {
    /// Party identified by mobile phone number
    pub fn msisdn(party_id: impl Into<String>) -> Self {
        Self {
            party_id_type: PartyIdType::Msisdn,
            party_id: party_id.into(),
        }
    }

    /// Party identified by email address
    pub fn email(party_id: impl Into<String>) -> Self {
        Self {
            party_id_type: PartyIdType::Email,
            party_id: party_id.into(),
        }
    }
}

/// Request body for Collections mutating operations
///
/// The counterpart field is named `payer` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Amount as a decimal string
    pub amount: String,
    /// 3-letter ISO currency code
    pub currency: String,
    /// Caller-supplied idempotency identifier
    pub external_id: String,
    /// Account the payment is pulled from
    pub payer: Party,
    /// Message shown on the payer statement (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_message: Option<String>,
    /// Note shown on the payee statement (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_note: Option<String>,
}

/// Request body for Disbursements mutating operations
///
/// Identical shape and rules to [`PaymentRequest`], with the counterpart
/// field named `payee` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Amount as a decimal string
    pub amount: String,
    /// 3-letter ISO currency code
    pub currency: String,
    /// Caller-supplied idempotency identifier
    pub external_id: String,
    /// Account the transfer is pushed to
    pub payee: Party,
    /// Message shown on the payer statement (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_message: Option<String>,
    /// Note shown on the payee statement (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_note: Option<String>,
}

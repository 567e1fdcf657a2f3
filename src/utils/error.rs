//! Error handling module
//!
//! Defines error types and handling logic used in the project

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single field-level validation failure
///
/// `field` uses dotted paths for nested fields (e.g. `payer.partyId`);
/// `value` holds the offending raw value, or `null` when the field was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field the rule applies to
    pub field: String,
    /// Human-readable rule description
    pub message: String,
    /// Offending raw value
    pub value: Value,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Client error types
#[derive(Error, Debug)]
pub enum MomoError {
    /// Request body failed validation; no network call was made
    #[error("request validation failed: {}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Credential configuration is incomplete
    #[error("configuration invalid: missing {}", .missing.join(", "))]
    Config {
        /// Names of the absent or empty credential fields
        missing: Vec<String>,
    },

    /// Token endpoint answered with a non-200 status
    #[error("authentication failed with status {status}")]
    AuthFailed {
        /// HTTP status returned by the token endpoint
        status: u16,
        /// Decoded response body
        body: Value,
    },

    /// Token endpoint answered 200 but the body carried no usable access token
    #[error("token response could not be decoded")]
    TokenDecode {
        /// Decoded response body
        body: Value,
    },

    /// Primary API call answered with a non-success status
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status, preserved exactly
        status: u16,
        /// Decoded response body
        body: Value,
    },

    /// Low-level connectivity failure, wrapped uniformly for all calls
    #[error("transport error: {0}")]
    Transport(String),

    /// Caller-supplied value could not be serialized to JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl MomoError {
    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MomoError::AuthFailed { status, .. } | MomoError::RequestFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the error was produced before any network call
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            MomoError::Validation(_) | MomoError::Config { .. } | MomoError::Serialization(_)
        )
    }

    /// Field errors for a validation failure, empty otherwise
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            MomoError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Result type alias
pub type MomoResult<T> = Result<T, MomoError>;

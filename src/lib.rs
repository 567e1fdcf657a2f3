//! MTN Mobile Money Open API client
//!
//! Provides Collections (pull payments) and Disbursements (push payments)
//! with request validation, token exchange, and normalized error reporting

pub mod config;
pub mod models;
pub mod services;
pub mod transport;
pub mod utils;

// Re-export common types
pub use config::{Config, Environment};
pub use models::{Party, PartyIdType, PaymentRequest, TokenResponse, TransferRequest};
pub use services::{Collections, Disbursements, Service};
pub use transport::{HttpTransport, Transport};
pub use utils::error::{MomoError, MomoResult, ValidationError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}

//! Data models module
//!
//! Defines request and token data structures for the Collections and Disbursements APIs

pub mod request;
pub mod token;

pub use request::{Party, PartyIdType, PaymentRequest, TransferRequest};
pub use token::TokenResponse;

//! Configuration management module
//!
//! Responsible for loading and validating API credentials from environment variables or explicit values

pub mod settings;

pub use settings::{Config, Environment};

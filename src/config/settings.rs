//! Credential configuration
//!
//! Defines the credential bundle and environment loading logic

use crate::utils::error::{MomoError, MomoResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Environment variable holding the subscription key
pub const ENV_SUBSCRIPTION_KEY: &str = "MOMO_SUBSCRIPTION_KEY";
/// Environment variable holding the API user id
pub const ENV_USER_ID: &str = "MOMO_USER_ID";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "MOMO_API_KEY";
/// Environment variable selecting the target environment
pub const ENV_TARGET_ENVIRONMENT: &str = "MOMO_TARGET_ENVIRONMENT";

/// Target environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox environment (default)
    #[default]
    Sandbox,
    /// Production environment
    Production,
}

impl Environment {
    /// Value sent in the `X-Target-Environment` header
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    /// Base URL of the API host for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.momodeveloper.mtn.com",
            Environment::Production => "https://momodeveloper.mtn.com",
        }
    }

    /// Parse an environment name, falling back to sandbox for unknown values
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Sandbox,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential bundle passed into every operation
///
/// Immutable per call; operations receive their own value and never share
/// mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Subscription key for the API product
    pub subscription_key: String,
    /// Provisioned API user id
    pub user_id: String,
    /// Provisioned API key
    pub api_key: String,
    /// Target environment selector
    #[serde(default)]
    pub target_environment: Environment,
}

impl Config {
    /// Create a configuration from explicit values
    pub fn new(
        subscription_key: impl Into<String>,
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        target_environment: Environment,
    ) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            user_id: user_id.into(),
            api_key: api_key.into(),
            target_environment,
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Reads `MOMO_SUBSCRIPTION_KEY`, `MOMO_USER_ID`, `MOMO_API_KEY` and
    /// `MOMO_TARGET_ENVIRONMENT` (a `.env` file is honored when present).
    /// All missing required variables are reported together.
    pub fn from_env() -> MomoResult<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let config = Self {
            subscription_key: env::var(ENV_SUBSCRIPTION_KEY).unwrap_or_default(),
            user_id: env::var(ENV_USER_ID).unwrap_or_default(),
            api_key: env::var(ENV_API_KEY).unwrap_or_default(),
            target_environment: env::var(ENV_TARGET_ENVIRONMENT)
                .map(|v| Environment::from_name(&v))
                .unwrap_or_default(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate that every required credential field is non-empty
    ///
    /// Applied on loading and again at every operation entry, so ad hoc
    /// configurations get the same checks as environment-loaded ones.
    pub fn validate(&self) -> MomoResult<()> {
        let mut missing = Vec::new();

        if self.subscription_key.is_empty() {
            missing.push("subscription_key".to_string());
        }
        if self.user_id.is_empty() {
            missing.push("user_id".to_string());
        }
        if self.api_key.is_empty() {
            missing.push("api_key".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MomoError::Config { missing })
        }
    }
}

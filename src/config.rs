use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

/// Default values for configuration
const DEFAULT_BASE_URL: &str = "https://api.paypal.com/";
const DEFAULT_PARTNER_ATTRIBUTION_ID: &str = "ppcp-capture-bn-code";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";

#[derive(Debug, Error)]
pub enum PayPalConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Configuration for the PayPal REST API client.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PayPalApiConfig {
    /// Base URL of the PayPal REST API, with trailing slash
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    /// Value sent as the PayPal-Partner-Attribution-Id header on every call
    #[serde(default = "default_partner_attribution_id")]
    #[validate(length(min = 1))]
    pub partner_attribution_id: String,

    /// Request timeout in seconds, applied on the HTTP transport
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_partner_attribution_id() -> String {
    DEFAULT_PARTNER_ATTRIBUTION_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for PayPalApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            partner_attribution_id: default_partner_attribution_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Loads configuration from `config/` files and `PAYPAL`-prefixed environment
/// variables, falling back to built-in defaults.
pub fn load_config() -> Result<PayPalApiConfig, PayPalConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading PayPal configuration for environment: {}", run_env);

    let config = Config::builder()
        .add_source(File::with_name(&format!("{}/paypal", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/paypal.{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("PAYPAL"))
        .build()?;

    let api_config: PayPalApiConfig = config.try_deserialize()?;

    api_config.validate().map_err(|e| {
        error!("PayPal configuration validation failed: {:?}", e);
        e
    })?;

    Ok(api_config)
}

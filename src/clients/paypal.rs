use reqwest::Method;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::error;

use crate::config::PayPalApiConfig;
use crate::errors::ServiceError;

/// Short-lived bearer credential issued by the authorization collaborator.
/// Never persisted by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Status code and parsed body of a provider call, carried together.
///
/// Non-2xx responses are not errors at this layer: the provider's error payload
/// comes back exactly like a success payload, and callers inspect the content
/// (`debug_id`, `status`, missing fields) to detect failure.
#[derive(Clone, Debug)]
pub struct PayPalResponse {
    pub status_code: u16,
    pub body: Value,
}

/// Authenticated HTTP client for the PayPal REST API.
#[derive(Clone, Debug)]
pub struct PayPalClient {
    http: reqwest::Client,
    base_url: String,
    partner_attribution_id: String,
}

impl PayPalClient {
    pub fn new(config: &PayPalApiConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::ExternalServiceError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            partner_attribution_id: config.partner_attribution_id.clone(),
        })
    }

    pub async fn get(
        &self,
        path: &str,
        token: &AccessToken,
    ) -> Result<PayPalResponse, ServiceError> {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: &AccessToken,
        body: &Value,
    ) -> Result<PayPalResponse, ServiceError> {
        self.request(Method::POST, path, token, Some(body)).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        token: &AccessToken,
        body: Option<&Value>,
    ) -> Result<PayPalResponse, ServiceError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("Authorization", format!("Bearer {}", token.as_str()))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("PayPal-Partner-Attribution-Id", &self.partner_attribution_id);

        if let Some(body) = body {
            request = request.json(body);
        }

        // A transport failure with no response at all is the only hard error
        // here; responses of any status are decoded and handed back.
        let response = request.send().await.map_err(|e| {
            ServiceError::ExternalServiceError(format!("{} request to \"{}\" failed: {}", method, url, e))
        })?;

        let status_code = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            ServiceError::ExternalServiceError(format!("{} request to \"{}\" failed: {}", method, url, e))
        })?;

        let parsed: Value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::Object(Map::new()));

        if status_code != 200 {
            if let Some(debug_id) = parsed.get("debug_id").and_then(Value::as_str) {
                error!(
                    "{} request to \"{}\" failed with debug ID {}",
                    method, url, debug_id
                );
            }
        }

        Ok(PayPalResponse {
            status_code,
            body: parsed,
        })
    }
}

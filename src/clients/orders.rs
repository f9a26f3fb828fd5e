use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::paypal::{AccessToken, PayPalClient};
use crate::errors::ServiceError;

/// Shipping address payload as PayPal returns it on a purchase unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteShipping {
    pub address: RemoteAddress,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PurchaseUnit {
    pub reference_id: String,
    pub shipping: RemoteShipping,
}

/// Snapshot of the provider-side order, as fetched after capture.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemoteOrder {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

impl RemoteOrder {
    /// Multi-purchase-unit orders are unsupported by this flow; anything other
    /// than exactly one unit fails loudly here instead of indexing blindly.
    pub fn single_purchase_unit(&self) -> Result<&PurchaseUnit, ServiceError> {
        match self.purchase_units.as_slice() {
            [unit] => Ok(unit),
            units => Err(ServiceError::PurchaseUnitMismatch(units.len())),
        }
    }
}

/// Replacement monetary breakdown for a purchase unit. All values are
/// decimal-string major-unit amounts in the provider's numeric format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountBreakdown {
    pub order_total: String,
    pub item_total: String,
    pub shipping_total: String,
    pub tax_total: String,
    pub currency_code: String,
}

/// Narrow facade over the provider's checkout-order endpoints. One HTTP call
/// per operation; retry policy, if any, lives outside this crate.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Replaces the monetary breakdown of the purchase unit identified by
    /// `reference_id` on the remote order. Returns the provider payload as-is.
    async fn update_order(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
        reference_id: &str,
        amounts: &AmountBreakdown,
    ) -> Result<Value, ServiceError>;

    /// Instructs the provider to finalize (capture) the order. Returns the
    /// provider payload as-is.
    async fn complete_order(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
    ) -> Result<Value, ServiceError>;

    /// Fetches the current remote order state.
    async fn order_details(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
    ) -> Result<RemoteOrder, ServiceError>;
}

/// reqwest-backed implementation of [`OrdersApi`].
#[derive(Clone, Debug)]
pub struct PayPalOrdersApi {
    client: PayPalClient,
}

impl PayPalOrdersApi {
    pub fn new(client: PayPalClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersApi for PayPalOrdersApi {
    async fn update_order(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
        reference_id: &str,
        amounts: &AmountBreakdown,
    ) -> Result<Value, ServiceError> {
        let body = json!([{
            "op": "replace",
            "path": format!("/purchase_units/@reference_id=='{}'/amount", reference_id),
            "value": {
                "currency_code": amounts.currency_code,
                "value": amounts.order_total,
                "breakdown": {
                    "item_total": {
                        "currency_code": amounts.currency_code,
                        "value": amounts.item_total,
                    },
                    "shipping": {
                        "currency_code": amounts.currency_code,
                        "value": amounts.shipping_total,
                    },
                    "tax_total": {
                        "currency_code": amounts.currency_code,
                        "value": amounts.tax_total,
                    },
                },
            },
        }]);

        let response = self
            .client
            .post(&format!("v2/checkout/orders/{}", paypal_order_id), token, &body)
            .await?;

        Ok(response.body)
    }

    async fn complete_order(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
    ) -> Result<Value, ServiceError> {
        let response = self
            .client
            .post(
                &format!("v2/checkout/orders/{}/capture", paypal_order_id),
                token,
                &json!({}),
            )
            .await?;

        Ok(response.body)
    }

    async fn order_details(
        &self,
        token: &AccessToken,
        paypal_order_id: &str,
    ) -> Result<RemoteOrder, ServiceError> {
        let response = self
            .client
            .get(&format!("v2/checkout/orders/{}", paypal_order_id), token)
            .await?;

        // A degenerate error payload is missing the expected fields and fails
        // here, after the adapter has already logged it.
        serde_json::from_value(response.body)
            .map_err(|e| ServiceError::SerializationError(format!("remote order snapshot: {}", e)))
    }
}

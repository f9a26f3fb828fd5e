use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::clients::orders::RemoteAddress;
use crate::clients::paypal::AccessToken;
use crate::errors::ServiceError;
use crate::models::order::Order;
use crate::models::payment::{Payment, PaymentMethod};

pub mod order_provider;

pub use order_provider::OrderProvider;

/// Acquires (and may cache/refresh) an access token for a payment method.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn authorize(&self, method: &PaymentMethod) -> Result<AccessToken, ServiceError>;
}

/// Persistence boundary for local orders. Absence is an `Ok(None)`, turned into
/// a domain-level not-found by [`OrderProvider`].
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, ServiceError>;
    async fn find_by_token(&self, token_value: &str) -> Result<Option<Order>, ServiceError>;
}

/// Totals derived from an order's line items, in major currency units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTotals {
    pub total_item_value: Decimal,
    pub total_tax: Decimal,
}

/// Supplies the item/tax breakdown for an order.
#[async_trait]
pub trait ItemDataProvider: Send + Sync {
    async fn provide(&self, order: &Order) -> Result<ItemTotals, ServiceError>;
}

/// Normalizes a provider-supplied shipping address onto the local order.
#[async_trait]
pub trait AddressProcessor: Send + Sync {
    async fn process(&self, address: &RemoteAddress, order: &mut Order)
        -> Result<(), ServiceError>;
}

/// Applies a new amount to the local payment record.
#[async_trait]
pub trait PaymentUpdater: Send + Sync {
    async fn update_amount(&self, payment: &mut Payment, new_amount: i64)
        -> Result<(), ServiceError>;
}

/// Advances the local order's payment-state machine from its current totals.
#[async_trait]
pub trait OrderPaymentStateResolver: Send + Sync {
    async fn resolve(&self, order: &Order) -> Result<(), ServiceError>;
}

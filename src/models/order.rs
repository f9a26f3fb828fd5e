use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shipping address on the local order. Mutated by the address processor with
/// provider-supplied data after capture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
}

/// Local order aggregate. All monetary amounts are minor-unit integers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Opaque token identifying the order in storefront URLs
    pub token_value: String,
    pub total: i64,
    pub shipping_total: i64,
    pub currency_code: String,
    pub shipping_address: Option<Address>,
}

pub mod orders;
pub mod paypal;

pub use orders::{AmountBreakdown, OrdersApi, PayPalOrdersApi, RemoteOrder};
pub use paypal::{AccessToken, PayPalClient, PayPalResponse};

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::clients::orders::AmountBreakdown;
use crate::errors::ServiceError;
use crate::models::order::Order;
use crate::models::payment::Payment;
use crate::providers::{ItemDataProvider, ItemTotals};

/// Converts a minor-unit amount to the provider's two-decimal major-unit
/// string format (1000 -> "10.00").
fn to_major_units(minor: i64) -> String {
    Decimal::new(minor, 2).to_string()
}

/// Decides whether local and remote totals have diverged and computes the
/// replacement breakdown to push remotely. Pure aside from the items call.
pub struct AmountReconciler {
    items_provider: Arc<dyn ItemDataProvider>,
}

impl AmountReconciler {
    pub fn new(items_provider: Arc<dyn ItemDataProvider>) -> Self {
        Self { items_provider }
    }

    /// The reconciliation gate: remote amounts are only rewritten when the
    /// payment amount drifted from the order total.
    pub fn needs_update(&self, payment: &Payment, order: &Order) -> bool {
        payment.amount != order.total
    }

    /// Derives the breakdown `update_order` needs from the items provider and
    /// the order's shipping total.
    pub async fn replacement_breakdown(
        &self,
        order: &Order,
    ) -> Result<AmountBreakdown, ServiceError> {
        let ItemTotals {
            total_item_value,
            total_tax,
        } = self.items_provider.provide(order).await?;

        Ok(AmountBreakdown {
            order_total: to_major_units(order.total),
            item_total: total_item_value.to_string(),
            shipping_total: to_major_units(order.shipping_total),
            tax_total: total_tax.to_string(),
            currency_code: order.currency_code.clone(),
        })
    }
}

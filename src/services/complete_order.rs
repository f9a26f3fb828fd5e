use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::clients::orders::OrdersApi;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::payment::{Payment, PaymentDetails, PaymentStatus};
use crate::providers::{
    AccessTokenProvider, AddressProcessor, OrderPaymentStateResolver, OrderProvider,
    PaymentUpdater,
};
use crate::services::reconciliation::AmountReconciler;

const REMOTE_STATUS_COMPLETED: &str = "COMPLETED";

/// A completion request dispatched by the surrounding payment framework.
#[derive(Clone, Debug)]
pub struct CompleteOrderRequest {
    /// Provider order id carried by the completion trigger itself. Used as-is
    /// for capture and detail fetch; distinct from the id stored on the
    /// payment details.
    pub paypal_order_id: String,
    pub model: RequestModel,
}

/// The model a completion request targets. Only payments are supported.
#[derive(Clone, Debug)]
pub enum RequestModel {
    Payment(Payment),
    Other(Value),
}

/// Sequences reconciliation, capture, detail fetch, and local write-back as
/// one strictly ordered flow.
///
/// Steps are never retried and any failure propagates to the caller. There is
/// no partial-commit protection: if capture fails after a successful amount
/// update, the local changes from reconciliation stay committed while the
/// remote order remains uncaptured. Duplicate invocations for the same payment
/// are not guarded here either; both are external concerns.
pub struct CompleteOrderService {
    token_provider: Arc<dyn AccessTokenProvider>,
    orders_api: Arc<dyn OrdersApi>,
    reconciler: AmountReconciler,
    order_provider: OrderProvider,
    address_processor: Arc<dyn AddressProcessor>,
    payment_updater: Arc<dyn PaymentUpdater>,
    state_resolver: Arc<dyn OrderPaymentStateResolver>,
    event_sender: EventSender,
}

impl CompleteOrderService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        token_provider: Arc<dyn AccessTokenProvider>,
        orders_api: Arc<dyn OrdersApi>,
        reconciler: AmountReconciler,
        order_provider: OrderProvider,
        address_processor: Arc<dyn AddressProcessor>,
        payment_updater: Arc<dyn PaymentUpdater>,
        state_resolver: Arc<dyn OrderPaymentStateResolver>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            token_provider,
            orders_api,
            reconciler,
            order_provider,
            address_processor,
            payment_updater,
            state_resolver,
            event_sender,
        }
    }

    /// Runs the completion flow for one payment and returns the finalized
    /// payment record.
    #[instrument(skip(self, request), fields(paypal_order_id = %request.paypal_order_id))]
    pub async fn execute(&self, request: CompleteOrderRequest) -> Result<Payment, ServiceError> {
        let mut payment = match request.model {
            RequestModel::Payment(payment) => payment,
            RequestModel::Other(_) => {
                return Err(ServiceError::UnsupportedRequest(
                    "completion requests must target a payment".to_string(),
                ));
            }
        };

        // Token acquisition failure is fatal to the whole flow.
        let token = self.token_provider.authorize(&payment.method).await?;

        let mut order = self.order_provider.order_by_id(payment.order_id).await?;

        let details = payment.details.clone().ok_or_else(|| {
            ServiceError::InvalidDetails(
                "payment carries no provider order reference".to_string(),
            )
        })?;

        if self.reconciler.needs_update(&payment, &order) {
            let breakdown = self.reconciler.replacement_breakdown(&order).await?;

            self.orders_api
                .update_order(
                    &token,
                    details.paypal_order_id(),
                    details.reference_id(),
                    &breakdown,
                )
                .await?;

            self.payment_updater
                .update_amount(&mut payment, order.total)
                .await?;
            self.state_resolver.resolve(&order).await?;

            info!(
                payment_id = %payment.id,
                new_amount = order.total,
                "Reconciled payment amount with order total"
            );

            let event = Event::PaymentAmountReconciled {
                payment_id: payment.id,
                order_id: order.id,
                new_amount: order.total,
                timestamp: Utc::now(),
            };
            if let Err(e) = self.event_sender.send(event).await {
                warn!(error = %e, "Failed to send amount reconciled event");
            }
        }

        self.orders_api
            .complete_order(&token, &request.paypal_order_id)
            .await?;

        let remote_order = self
            .orders_api
            .order_details(&token, &request.paypal_order_id)
            .await?;

        let unit = remote_order.single_purchase_unit()?;
        let status = if remote_order.status == REMOTE_STATUS_COMPLETED {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Processing
        };

        // Full replacement of the details, never a merge.
        payment.details = Some(PaymentDetails::Finalized {
            status,
            paypal_order_id: remote_order.id.clone(),
            reference_id: unit.reference_id.clone(),
        });

        self.address_processor
            .process(&unit.shipping.address, &mut order)
            .await?;

        let event = Event::PaymentCaptured {
            payment_id: payment.id,
            order_id: order.id,
            amount: payment.amount,
            status,
            timestamp: Utc::now(),
        };
        if let Err(e) = self.event_sender.send(event).await {
            warn!(error = %e, "Failed to send payment captured event");
        }

        info!(
            payment_id = %payment.id,
            remote_status = %remote_order.status,
            status = ?status,
            "PayPal order completed"
        );

        Ok(payment)
    }
}

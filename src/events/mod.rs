use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::models::payment::PaymentStatus;

/// Domain events emitted by the capture flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// A local payment amount was rewritten to match the order total before
    /// capture.
    PaymentAmountReconciled {
        payment_id: Uuid,
        order_id: Uuid,
        new_amount: i64,
        timestamp: DateTime<Utc>,
    },
    /// The remote order was captured and the local payment finalized.
    PaymentCaptured {
        payment_id: Uuid,
        order_id: Uuid,
        amount: i64,
        status: PaymentStatus,
        timestamp: DateTime<Utc>,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::order::Order;
use crate::providers::OrderRepository;

/// Looks up local orders, turning repository absence into a distinct
/// not-found failure instead of propagating `None` into the flow.
pub struct OrderProvider {
    repository: Arc<dyn OrderRepository>,
}

impl OrderProvider {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn order_by_id(&self, id: Uuid) -> Result<Order, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", id)))
    }

    pub async fn order_by_token(&self, token_value: &str) -> Result<Order, ServiceError> {
        self.repository
            .find_by_token(token_value)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Order with token {} not found", token_value))
            })
    }
}

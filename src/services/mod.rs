pub mod complete_order;
pub mod reconciliation;

pub use complete_order::{CompleteOrderRequest, CompleteOrderService, RequestModel};
pub use reconciliation::AmountReconciler;

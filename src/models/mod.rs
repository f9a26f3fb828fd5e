pub mod order;
pub mod payment;

pub use order::{Address, Order};
pub use payment::{Payment, PaymentDetails, PaymentMethod, PaymentStatus};

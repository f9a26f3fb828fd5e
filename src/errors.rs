use thiserror::Error;

/// Errors surfaced by the capture flow and its collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The completion entry point only accepts requests targeting a payment.
    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    /// Payment details are absent or missing the provider order reference.
    #[error("Invalid payment details: {0}")]
    InvalidDetails(String),

    /// This flow supports exactly one purchase unit per remote order.
    #[error("Expected exactly one purchase unit, found {0}")]
    PurchaseUnitMismatch(usize),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

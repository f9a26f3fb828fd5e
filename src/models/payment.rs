use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalized local payment status, derived from the remote order status: only
/// a remote `COMPLETED` maps to `Completed`, everything else is `Processing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Processing,
}

/// Provider-side references carried on a payment.
///
/// Replaces the free-form details mapping of older integrations with an
/// explicit variant per lifecycle stage; serde round-trips to the flat
/// `{status, paypal_order_id, reference_id}` key set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "DetailsRepr")]
pub enum PaymentDetails {
    /// Written by the orchestrator after capture; full replacement, not a merge.
    Finalized {
        status: PaymentStatus,
        paypal_order_id: String,
        reference_id: String,
    },
    /// Written when the remote order is created, before capture.
    Pending {
        paypal_order_id: String,
        reference_id: String,
    },
}

/// Flat wire shape of the details mapping. An unrecognized `status` string or
/// an unexpected key fails deserialization instead of downgrading to
/// [`PaymentDetails::Pending`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailsRepr {
    #[serde(default)]
    status: Option<PaymentStatus>,
    paypal_order_id: String,
    reference_id: String,
}

impl From<DetailsRepr> for PaymentDetails {
    fn from(repr: DetailsRepr) -> Self {
        match repr.status {
            Some(status) => Self::Finalized {
                status,
                paypal_order_id: repr.paypal_order_id,
                reference_id: repr.reference_id,
            },
            None => Self::Pending {
                paypal_order_id: repr.paypal_order_id,
                reference_id: repr.reference_id,
            },
        }
    }
}

impl PaymentDetails {
    pub fn paypal_order_id(&self) -> &str {
        match self {
            Self::Finalized { paypal_order_id, .. } | Self::Pending { paypal_order_id, .. } => {
                paypal_order_id
            }
        }
    }

    pub fn reference_id(&self) -> &str {
        match self {
            Self::Finalized { reference_id, .. } | Self::Pending { reference_id, .. } => {
                reference_id
            }
        }
    }

    pub fn status(&self) -> Option<PaymentStatus> {
        match self {
            Self::Finalized { status, .. } => Some(*status),
            Self::Pending { .. } => None,
        }
    }
}

/// Payment method the charge attempt was made with; configuration lives with
/// the token provider, opaque to this flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub code: String,
}

/// Local record of a charge attempt. `amount` is a minor-unit integer and must
/// equal the order total at the moment capture is finalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub order_id: Uuid,
    pub method: PaymentMethod,
    pub amount: i64,
    pub details: Option<PaymentDetails>,
}

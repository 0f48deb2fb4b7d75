use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Cancelled,
    Failed,
}

impl PaymentStatus {
    /// Terminal states never leave this flow again.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the reconciliation flow may move a payment from `self` to
    /// `target`. Redelivery of the state a payment already carries is
    /// allowed (and a no-op); any other move out of a terminal state is not.
    pub fn can_transition_to(self, target: Self) -> bool {
        self == Self::Pending || self == target
    }

    /// Maps PayHere's `status_code` field to a target payment status.
    ///
    /// Codes outside the documented set (e.g. `"0"` for pending pings) are
    /// informational and map to no transition at all.
    pub fn from_provider_code(code: &str) -> Option<Self> {
        match code {
            "2" => Some(Self::Paid),
            "-1" => Some(Self::Cancelled),
            "-2" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A payment row as owned by the external store.
///
/// `payment_id` doubles as the provider's order identifier. The gateway
/// reads and transitions these rows but never creates or deletes them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub payment_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub registration_id: String,
    pub payment_status: PaymentStatus,
    /// Provider-assigned payment reference, set on the first transition.
    pub payment_reference: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

use crate::domain::payment::PaymentStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Failed,
}

impl From<PaymentStatus> for RegistrationStatus {
    /// Registration status is derived deterministically from the payment
    /// status; it is never set through any other path.
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Confirmed,
            PaymentStatus::Cancelled => Self::Cancelled,
            PaymentStatus::Failed => Self::Failed,
        }
    }
}

/// An attendee registration row, created by the registration flow before
/// the gateway is ever invoked.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Registration {
    pub registration_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub status: RegistrationStatus,
}

impl Registration {
    /// Splits `full_name` into the (first, last) pair PayHere expects.
    ///
    /// The first whitespace token is the first name; the remaining tokens
    /// joined by spaces form the last name, with a placeholder when the
    /// name is a single token.
    pub fn split_name(&self) -> (String, String) {
        let mut tokens = self.full_name.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");
        let last = if rest.is_empty() {
            "User".to_string()
        } else {
            rest
        };
        (first, last)
    }
}

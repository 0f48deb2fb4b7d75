use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Result of a guarded payment transition.
#[derive(Debug, PartialEq, Clone)]
pub enum TransitionOutcome {
    /// The row was in `pending` and now carries the requested status.
    Applied { registration_id: String },
    /// The row already carried the requested status (provider redelivery).
    AlreadyApplied { registration_id: String },
    /// The row is in a different terminal state; nothing was written.
    Rejected { current: PaymentStatus },
    /// No payment row matched the identifier.
    NoMatch,
}

/// Store access for payment rows.
///
/// The guarded update-by-id is the flow's sole concurrency-control point:
/// implementations must serialize concurrent `transition` calls for the
/// same `payment_id`.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn get(&self, payment_id: &str) -> Result<Option<Payment>>;

    /// Moves the payment to `status` and records the provider reference and
    /// timestamp, but only when the transition is permitted
    /// (`pending -> status`, or the idempotent `status -> status`).
    async fn transition(
        &self,
        payment_id: &str,
        status: PaymentStatus,
        reference: &str,
        paid_at: DateTime<Utc>,
    ) -> Result<TransitionOutcome>;
}

/// Store access for registration rows.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn get(&self, registration_id: &str) -> Result<Option<Registration>>;

    /// Sets the registration status, returning whether a row matched.
    async fn set_status(&self, registration_id: &str, status: RegistrationStatus) -> Result<bool>;
}

pub type PaymentStoreRef = Arc<dyn PaymentStore>;
pub type RegistrationStoreRef = Arc<dyn RegistrationStore>;

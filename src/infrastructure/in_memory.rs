use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::ports::{PaymentStore, RegistrationStore, TransitionOutcome};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment rows.
///
/// Uses `Arc<RwLock<HashMap>>` for shared concurrent access; the single
/// write section in `transition` gives the serialization the port requires.
/// This is the reference adapter and the test double — production callers
/// implement the ports against their own database.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<String, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row, standing in for the out-of-scope registration flow
    /// that creates payments before the gateway runs.
    pub async fn seed(&self, payment: Payment) {
        let mut payments = self.payments.write().await;
        payments.insert(payment.payment_id.clone(), payment);
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn get(&self, payment_id: &str) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(payment_id).cloned())
    }

    async fn transition(
        &self,
        payment_id: &str,
        status: PaymentStatus,
        reference: &str,
        paid_at: DateTime<Utc>,
    ) -> Result<TransitionOutcome> {
        let mut payments = self.payments.write().await;
        let Some(payment) = payments.get_mut(payment_id) else {
            return Ok(TransitionOutcome::NoMatch);
        };

        if payment.payment_status == status {
            return Ok(TransitionOutcome::AlreadyApplied {
                registration_id: payment.registration_id.clone(),
            });
        }
        if !payment.payment_status.can_transition_to(status) {
            return Ok(TransitionOutcome::Rejected {
                current: payment.payment_status,
            });
        }

        payment.payment_status = status;
        payment.payment_reference = Some(reference.to_string());
        payment.paid_at = Some(paid_at);
        Ok(TransitionOutcome::Applied {
            registration_id: payment.registration_id.clone(),
        })
    }
}

/// A thread-safe in-memory store for registration rows.
#[derive(Default, Clone)]
pub struct InMemoryRegistrationStore {
    registrations: Arc<RwLock<HashMap<String, Registration>>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, registration: Registration) {
        let mut registrations = self.registrations.write().await;
        registrations.insert(registration.registration_id.clone(), registration);
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn get(&self, registration_id: &str) -> Result<Option<Registration>> {
        let registrations = self.registrations.read().await;
        Ok(registrations.get(registration_id).cloned())
    }

    async fn set_status(&self, registration_id: &str, status: RegistrationStatus) -> Result<bool> {
        let mut registrations = self.registrations.write().await;
        match registrations.get_mut(registration_id) {
            Some(registration) => {
                registration.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

use crate::config::GatewayConfig;
use crate::domain::payment::PaymentStatus;
use crate::domain::ports::{PaymentStoreRef, RegistrationStoreRef, TransitionOutcome};
use crate::domain::registration::RegistrationStatus;
use crate::domain::signature;
use crate::error::{GatewayError, Result};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// PayHere's server-to-server notification body.
///
/// Field names are fixed by the provider's contract; every field is
/// required, so a malformed delivery fails form extraction in one place.
#[derive(Debug, Deserialize, Clone)]
pub struct PayhereNotification {
    pub merchant_id: String,
    pub order_id: String,
    /// PayHere's own payment identifier, stored as our payment reference.
    pub payment_id: String,
    pub payhere_amount: String,
    pub payhere_currency: String,
    pub status_code: String,
    pub md5sig: String,
}

/// What the reconciliation decided. Every variant is acknowledged to the
/// provider as received; the distinctions exist for logging and tests.
#[derive(Debug, PartialEq)]
pub enum NotificationOutcome {
    /// Payment (and registration) moved to the mapped statuses.
    Reconciled {
        payment_status: PaymentStatus,
        registration_status: RegistrationStatus,
    },
    /// Redelivery of a status the payment already carries.
    AlreadyReconciled,
    /// Informational status code; no store mutation.
    Ignored,
    /// Signature was valid but no payment row matched the order id.
    UnknownOrder,
    /// Redelivery conflicting with an earlier terminal transition.
    Superseded { current: PaymentStatus },
}

/// Verifies signed provider callbacks and applies the state transitions.
///
/// Nothing in the notification is trusted before the merchant id and
/// `md5sig` checks pass; both failures leave the store untouched.
#[derive(Clone)]
pub struct NotificationService {
    config: Arc<GatewayConfig>,
    payments: PaymentStoreRef,
    registrations: RegistrationStoreRef,
}

impl NotificationService {
    pub fn new(
        config: Arc<GatewayConfig>,
        payments: PaymentStoreRef,
        registrations: RegistrationStoreRef,
    ) -> Self {
        Self {
            config,
            payments,
            registrations,
        }
    }

    pub async fn process(&self, notification: &PayhereNotification) -> Result<NotificationOutcome> {
        self.authenticate(notification)?;

        let Some(payment_status) = PaymentStatus::from_provider_code(&notification.status_code)
        else {
            info!(
                order_id = %notification.order_id,
                status_code = %notification.status_code,
                "informational notification, no transition"
            );
            return Ok(NotificationOutcome::Ignored);
        };
        let registration_status = RegistrationStatus::from(payment_status);

        // The payment update must complete and be observed before the
        // registration update: the registration id comes out of its result.
        let outcome = self
            .payments
            .transition(
                &notification.order_id,
                payment_status,
                &notification.payment_id,
                Utc::now(),
            )
            .await?;

        match outcome {
            TransitionOutcome::Applied { registration_id } => {
                self.update_registration(&registration_id, registration_status)
                    .await;
                info!(
                    order_id = %notification.order_id,
                    status = ?payment_status,
                    "payment reconciled"
                );
                Ok(NotificationOutcome::Reconciled {
                    payment_status,
                    registration_status,
                })
            }
            TransitionOutcome::AlreadyApplied { .. } => {
                info!(
                    order_id = %notification.order_id,
                    status = ?payment_status,
                    "redelivery of settled status, no-op"
                );
                Ok(NotificationOutcome::AlreadyReconciled)
            }
            TransitionOutcome::Rejected { current } => {
                warn!(
                    order_id = %notification.order_id,
                    requested = ?payment_status,
                    current = ?current,
                    "conflicting redelivery rejected by transition guard"
                );
                Ok(NotificationOutcome::Superseded { current })
            }
            TransitionOutcome::NoMatch => {
                // Acknowledged anyway: a permanently missing row must not
                // feed the provider's retry mechanism.
                error!(order_id = %notification.order_id, "no payment matched notification");
                Ok(NotificationOutcome::UnknownOrder)
            }
        }
    }

    fn authenticate(&self, notification: &PayhereNotification) -> Result<()> {
        if notification.merchant_id != self.config.merchant_id {
            warn!(received = %notification.merchant_id, "merchant id mismatch");
            return Err(GatewayError::AuthenticationFailure(
                "merchant id mismatch".to_string(),
            ));
        }

        // The inbound amount string is hashed verbatim; reformatting it here
        // would break valid signatures.
        let expected = signature::notification_signature(
            &notification.merchant_id,
            &notification.order_id,
            &notification.payhere_amount,
            &notification.payhere_currency,
            &notification.status_code,
            &self.config.merchant_secret,
        );
        if expected != notification.md5sig.to_uppercase() {
            warn!(order_id = %notification.order_id, "md5sig mismatch");
            return Err(GatewayError::AuthenticationFailure(
                "signature mismatch".to_string(),
            ));
        }
        Ok(())
    }

    /// A registration failure after a committed payment transition is
    /// logged only; the payment update is never rolled back.
    async fn update_registration(&self, registration_id: &str, status: RegistrationStatus) {
        match self.registrations.set_status(registration_id, status).await {
            Ok(true) => {}
            Ok(false) => {
                error!(registration_id, "registration missing after payment update");
            }
            Err(err) => {
                error!(registration_id, %err, "registration update failed");
            }
        }
    }
}

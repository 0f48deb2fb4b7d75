use axum::Router;
use chrono::{DateTime, Utc};
use payhere_gateway::config::GatewayConfig;
use payhere_gateway::domain::payment::{Payment, PaymentStatus};
use payhere_gateway::domain::ports::{
    PaymentStore, PaymentStoreRef, RegistrationStoreRef, TransitionOutcome,
};
use payhere_gateway::domain::registration::{Registration, RegistrationStatus};
use payhere_gateway::domain::signature;
use payhere_gateway::error::Result;
use payhere_gateway::infrastructure::in_memory::{InMemoryPaymentStore, InMemoryRegistrationStore};
use payhere_gateway::interfaces::http::{self, AppState};
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

pub const MERCHANT_ID: &str = "1211149";
pub const MERCHANT_SECRET: &str = "integration-secret";

pub fn test_config() -> Arc<GatewayConfig> {
    Arc::new(GatewayConfig {
        merchant_id: MERCHANT_ID.to_string(),
        merchant_secret: MERCHANT_SECRET.to_string(),
        public_base_url: "https://pay.example.org".to_string(),
        sandbox: true,
    })
}

pub fn app(payments: PaymentStoreRef, registrations: RegistrationStoreRef) -> Router {
    http::router(AppState::new(test_config(), payments, registrations))
}

/// Payment "abc-123" (1500 LKR, pending) owned by registration "reg-1".
pub async fn seeded_stores() -> (Arc<InMemoryPaymentStore>, Arc<InMemoryRegistrationStore>) {
    let payments = Arc::new(InMemoryPaymentStore::new());
    payments
        .seed(Payment {
            payment_id: "abc-123".to_string(),
            amount: dec!(1500),
            currency: "LKR".to_string(),
            registration_id: "reg-1".to_string(),
            payment_status: PaymentStatus::Pending,
            payment_reference: None,
            paid_at: None,
        })
        .await;

    let registrations = Arc::new(InMemoryRegistrationStore::new());
    registrations
        .seed(Registration {
            registration_id: "reg-1".to_string(),
            full_name: "Nimal Perera".to_string(),
            email: "nimal@example.lk".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Lake Rd".to_string(),
            city: "Colombo".to_string(),
            status: RegistrationStatus::Pending,
        })
        .await;

    (payments, registrations)
}

/// A correctly signed urlencoded notification body for payment "abc-123".
pub fn notify_body(status_code: &str) -> String {
    signed_body(MERCHANT_ID, "abc-123", "1500.00", "LKR", status_code)
}

pub fn signed_body(
    merchant_id: &str,
    order_id: &str,
    amount: &str,
    currency: &str,
    status_code: &str,
) -> String {
    let md5sig = signature::notification_signature(
        merchant_id,
        order_id,
        amount,
        currency,
        status_code,
        MERCHANT_SECRET,
    );
    serde_urlencoded::to_string([
        ("merchant_id", merchant_id),
        ("order_id", order_id),
        ("payment_id", "320025"),
        ("payhere_amount", amount),
        ("payhere_currency", currency),
        ("status_code", status_code),
        ("md5sig", &md5sig),
    ])
    .unwrap()
}

/// Store double that counts write attempts; used to prove that rejected
/// notifications never touch the store.
#[derive(Default, Clone)]
pub struct RecordingPaymentStore {
    pub writes: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl PaymentStore for RecordingPaymentStore {
    async fn get(&self, _payment_id: &str) -> Result<Option<Payment>> {
        Ok(None)
    }

    async fn transition(
        &self,
        _payment_id: &str,
        _status: PaymentStatus,
        _reference: &str,
        _paid_at: DateTime<Utc>,
    ) -> Result<TransitionOutcome> {
        self.writes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(TransitionOutcome::NoMatch)
    }
}

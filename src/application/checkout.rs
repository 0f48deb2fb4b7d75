use crate::config::GatewayConfig;
use crate::domain::ports::{PaymentStoreRef, RegistrationStoreRef};
use crate::domain::signature;
use crate::error::{GatewayError, Result};
use serde::Serialize;
use std::sync::Arc;

/// Item description shown on the hosted payment page.
const CHECKOUT_ITEM: &str = "Event Ticket";
/// PayHere serves Sri Lankan merchants; the country field is fixed.
const CHECKOUT_COUNTRY: &str = "Sri Lanka";

/// The payload the browser client posts to PayHere's hosted checkout.
///
/// Field names follow PayHere's checkout API and must not change.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CheckoutPayload {
    pub merchant_id: String,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
    pub order_id: String,
    pub items: String,
    pub currency: String,
    pub amount: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub hash: String,
    pub sandbox: String,
}

/// Builds signed checkout payloads. Read-only: never mutates the store.
#[derive(Clone)]
pub struct CheckoutService {
    config: Arc<GatewayConfig>,
    payments: PaymentStoreRef,
    registrations: RegistrationStoreRef,
}

impl CheckoutService {
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

    /// Loads the payment and its registration and assembles the signed
    /// payload. `origin` is the requesting page's origin and anchors the
    /// return/cancel URLs; absent an origin the configured base URL is used.
    pub async fn build_payload(
        &self,
        payment_id: &str,
        origin: Option<&str>,
    ) -> Result<CheckoutPayload> {
        let payment = self
            .payments
            .get(payment_id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("payment {payment_id}")))?;
        let registration = self
            .registrations
            .get(&payment.registration_id)
            .await?
            .ok_or_else(|| {
                GatewayError::NotFound(format!("registration {}", payment.registration_id))
            })?;

        let amount = signature::format_amount(payment.amount);
        let hash = signature::checkout_signature(
            &self.config.merchant_id,
            payment_id,
            &amount,
            &payment.currency,
            &self.config.merchant_secret,
        );

        let (first_name, last_name) = registration.split_name();
        let origin = origin
            .unwrap_or(&self.config.public_base_url)
            .trim_end_matches('/');

        Ok(CheckoutPayload {
            merchant_id: self.config.merchant_id.clone(),
            return_url: format!("{origin}/payment/success"),
            cancel_url: format!("{origin}/payment/cancel"),
            notify_url: self.config.notify_url(),
            order_id: payment_id.to_string(),
            items: CHECKOUT_ITEM.to_string(),
            currency: payment.currency,
            amount,
            first_name,
            last_name,
            email: registration.email,
            phone: registration.phone,
            address: registration.address,
            city: registration.city,
            country: CHECKOUT_COUNTRY.to_string(),
            hash,
            sandbox: (if self.config.sandbox { "1" } else { "0" }).to_string(),
        })
    }
}

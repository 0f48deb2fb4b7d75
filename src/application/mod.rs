//! Application layer orchestrating the store ports.
//!
//! `CheckoutService` builds the signed hosted-checkout payload;
//! `NotificationService` verifies provider callbacks and applies the
//! payment/registration state transitions. Both are stateless between
//! requests and share only the injected configuration and store handles.

pub mod checkout;
pub mod notification;

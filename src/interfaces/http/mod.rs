use crate::application::checkout::CheckoutService;
use crate::application::notification::NotificationService;
use crate::config::GatewayConfig;
use crate::domain::ports::{PaymentStoreRef, RegistrationStoreRef};
use axum::Router;
use axum::http::HeaderName;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::routing::post;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod checkout;
pub mod notify;

/// Shared handler state: the two services over the injected stores.
#[derive(Clone)]
pub struct AppState {
    pub checkout: CheckoutService,
    pub notifications: NotificationService,
}

impl AppState {
    pub fn new(
        config: Arc<GatewayConfig>,
        payments: PaymentStoreRef,
        registrations: RegistrationStoreRef,
    ) -> Self {
        Self {
            checkout: CheckoutService::new(
                config.clone(),
                payments.clone(),
                registrations.clone(),
            ),
            notifications: NotificationService::new(config, payments, registrations),
        }
    }
}

/// Builds the gateway [`Router`].
///
/// The CORS layer answers OPTIONS preflights before any handler runs; the
/// header allow-list mirrors what the browser client sends.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ]);

    Router::new()
        .route("/payhere/checkout", post(checkout::create_checkout))
        .route("/payhere/notify", post(notify::handle_notification))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

use crate::application::notification::PayhereNotification;
use crate::error::GatewayError;
use crate::interfaces::http::AppState;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Acknowledgement body PayHere recognizes as "received".
const ACK: &str = "OK";

/// Server-to-server callback endpoint.
///
/// Authentication failures surface as 400 so the provider dashboard shows
/// the delivery as failed; everything else — including an unknown order —
/// is acknowledged to keep the provider's retry mechanism quiet.
pub async fn handle_notification(
    State(state): State<AppState>,
    Form(notification): Form<PayhereNotification>,
) -> Response {
    match state.notifications.process(&notification).await {
        Ok(_) => (StatusCode::OK, ACK).into_response(),
        Err(err @ (GatewayError::AuthenticationFailure(_) | GatewayError::Misconfigured(_))) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        Err(err) => {
            error!(order_id = %notification.order_id, %err, "notification processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}

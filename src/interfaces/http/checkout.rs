use crate::application::checkout::CheckoutPayload;
use crate::interfaces::http::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::ORIGIN;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub payment_id: String,
}

/// Client-facing responses are always HTTP 200 with a JSON body; failures
/// are folded into an `error` field so the browser's fetch path never has
/// to branch on status codes.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckoutResponse {
    Payload(Box<CheckoutPayload>),
    Error { error: String },
}

pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Json<CheckoutResponse> {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            error!(%rejection, "malformed checkout request");
            return Json(CheckoutResponse::Error {
                error: rejection.body_text(),
            });
        }
    };

    let origin = headers.get(ORIGIN).and_then(|value| value.to_str().ok());
    match state
        .checkout
        .build_payload(&request.payment_id, origin)
        .await
    {
        Ok(payload) => Json(CheckoutResponse::Payload(Box::new(payload))),
        Err(err) => {
            error!(payment_id = %request.payment_id, %err, "checkout payload failed");
            Json(CheckoutResponse::Error {
                error: err.to_string(),
            })
        }
    }
}

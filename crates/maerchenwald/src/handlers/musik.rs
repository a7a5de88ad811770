//! Music-trigger endpoint: proxies a trigger to the ESP32 controller.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    device::{envelope_for_status, failure_envelope},
    state::AppState,
};

/// Trigger the music controller (GET|POST /api/weihnachtsmusik).
///
/// Every outcome renders as a JSON envelope: the controller's status code
/// selects one of the fixed envelopes, and any transport failure maps to a
/// 500 envelope carrying the error text.
pub async fn activate_musik(State(state): State<AppState>) -> Response {
    match state.esp32.trigger().await {
        Ok(esp_status) => {
            tracing::info!(esp_status, "ESP32 responded");
            let (status, envelope) = envelope_for_status(esp_status);
            (status, Json(envelope)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "ESP32 call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(failure_envelope(&err)),
            )
                .into_response()
        }
    }
}

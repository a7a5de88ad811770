//! Client for the ESP32 music controller.
//!
//! The trigger is a single fire-and-forget GET with a short timeout; the
//! controller's status code selects one of a fixed set of response
//! envelopes. No retry is performed.

use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;

/// How long to wait for the controller before giving up, so requests never
/// hang on an offline device.
pub const TRIGGER_TIMEOUT: Duration = Duration::from_secs(4);

/// Response envelope for the music-trigger endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusikEnvelope {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esp_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MusikEnvelope {
    fn success(message: &str, esp_status: u16) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
            esp_status: Some(esp_status),
            error: None,
        }
    }
}

/// HTTP client for the controller's trigger endpoint.
#[derive(Debug, Clone)]
pub struct Esp32Client {
    http: reqwest::Client,
    trigger_url: String,
}

impl Esp32Client {
    /// Creates a client for the given trigger URL.
    pub fn new(trigger_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            trigger_url: trigger_url.into(),
        }
    }

    /// Fires the trigger and returns the controller's status code.
    ///
    /// A transport failure (including the timeout) is returned as-is for
    /// the caller to map into the failure envelope.
    pub async fn trigger(&self) -> Result<u16, reqwest::Error> {
        let response = self
            .http
            .get(&self.trigger_url)
            .timeout(TRIGGER_TIMEOUT)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}

/// Maps the controller's status code to the outbound status and envelope.
///
/// An unrecognized status reports an activation, the same as 201.
pub fn envelope_for_status(esp_status: u16) -> (StatusCode, MusikEnvelope) {
    match esp_status {
        200 => (
            StatusCode::OK,
            MusikEnvelope::success(
                "Weihnachtsmusik im Märchenwald läuft bereits. 🎄🎵",
                esp_status,
            ),
        ),
        300 => (
            StatusCode::MULTIPLE_CHOICES,
            MusikEnvelope::success(
                "Noch ist Nachruhe (von 8:00 bis 21:00 Uhr). Die Musik kann noch nicht gespielt werden. 🎄🎵",
                esp_status,
            ),
        ),
        _ => (
            StatusCode::CREATED,
            MusikEnvelope::success(
                "Weihnachtsmusik im Märchenwald wurde aktiviert 🎄🎵",
                esp_status,
            ),
        ),
    }
}

/// Envelope for a failed trigger call (transport error or timeout).
pub fn failure_envelope(error: &dyn std::fmt::Display) -> MusikEnvelope {
    MusikEnvelope {
        ok: false,
        message: "Fehler: ESP32 konnte nicht erreicht werden".to_string(),
        esp_status: None,
        error: Some(error.to_string()),
    }
}

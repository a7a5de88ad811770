//! Feedback endpoints: partition-scoped listing and insert-only creation.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use maerchenwald_core::feedback::{validate_feedback_text, FeedbackRecord, DEFAULT_PARTITION_KEY};
use maerchenwald_core::storage::clamp_top;

use crate::{error::AppError, state::AppState};

/// Query parameters for listing feedback.
#[derive(Debug, Deserialize)]
pub struct ListFeedbackQuery {
    /// Partition to list. Defaults to the writer's fixed partition.
    pub pk: Option<String>,
    /// Result cap, clamped into [1, 5000]. Absent means no cap.
    pub top: Option<i64>,
}

/// Response body for a feedback listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeedbackResponse {
    pub count: usize,
    pub partition_key: String,
    pub items: Vec<FeedbackRecord>,
}

/// Request body for storing feedback.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub feedback_text: Option<String>,
}

/// Response body for a stored submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCreatedResponse {
    pub message: String,
    pub id: String,
    pub partition_key: String,
}

/// List feedback for a partition (GET /api/feedback).
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<ListFeedbackQuery>,
) -> Result<Json<ListFeedbackResponse>, AppError> {
    let partition_key = query
        .pk
        .unwrap_or_else(|| DEFAULT_PARTITION_KEY.to_string());
    let top = query.top.map(clamp_top);

    let items = state
        .feedback_repo
        .list_partition(&partition_key, top)
        .await?;

    Ok(Json(ListFeedbackResponse {
        count: items.len(),
        partition_key,
        items,
    }))
}

/// Store one feedback submission (POST /api/feedback).
///
/// The body is parsed leniently: malformed JSON, a missing field, and a
/// non-string `feedbackText` are all rejected as the same validation error,
/// before any write is attempted.
pub async fn create_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<FeedbackCreatedResponse>), AppError> {
    let request: CreateFeedbackRequest = serde_json::from_slice(&body).unwrap_or_default();
    let feedback_text = validate_feedback_text(request.feedback_text.as_deref())?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let record = FeedbackRecord::new(feedback_text, user_agent);
    state.feedback_repo.create_feedback(&record).await?;

    tracing::info!(row_key = %record.row_key, "stored feedback");

    Ok((
        StatusCode::CREATED,
        Json(FeedbackCreatedResponse {
            message: "Feedback gespeichert 🎄".to_string(),
            id: record.row_key,
            partition_key: record.partition_key,
        }),
    ))
}

use super::ValidationError;

/// Validates a raw `feedbackText` value from a request body.
///
/// The field must be present and non-empty after trimming surrounding
/// whitespace. Returns the trimmed text, so stored records never carry
/// leading or trailing whitespace.
pub fn validate_feedback_text(raw: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingFeedbackText);
    }
    Ok(trimmed.to_string())
}

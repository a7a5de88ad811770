use thiserror::Error;

/// Errors that can occur when validating a feedback submission.
///
/// The display string doubles as the client-facing error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feedbackText is required (string).")]
    MissingFeedbackText,
}

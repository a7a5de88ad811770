mod error;
mod types;
mod validation;

pub use error::ValidationError;
pub use types::{FeedbackRecord, DEFAULT_PARTITION_KEY};
pub use validation::validate_feedback_text;

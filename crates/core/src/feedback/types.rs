use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partition under which all feedback submissions are grouped.
pub const DEFAULT_PARTITION_KEY: &str = "weihnachten";

/// A single feedback submission as stored in the table.
///
/// `(partition_key, row_key)` uniquely identifies a record. Records are
/// append-only: once written they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub partition_key: String,
    pub row_key: String,
    /// Free-form user content. Empty string when a stored row lacks the
    /// attribute.
    #[serde(default)]
    pub feedback_text: String,
    /// RFC 3339 creation timestamp, set by the server at write time. May be
    /// absent on legacy rows.
    #[serde(default)]
    pub created_at: Option<String>,
    /// User agent captured from the submitting request, if any.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl FeedbackRecord {
    /// Creates a record for a validated submission, assigning a fresh row
    /// key and the current timestamp.
    pub fn new(feedback_text: impl Into<String>, user_agent: Option<String>) -> Self {
        Self {
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
            row_key: Uuid::new_v4().to_string(),
            feedback_text: feedback_text.into(),
            created_at: Some(Utc::now().to_rfc3339()),
            user_agent,
        }
    }

    /// Sets a specific partition key (useful for testing).
    pub fn with_partition_key(mut self, partition_key: impl Into<String>) -> Self {
        self.partition_key = partition_key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_populates_keys_and_timestamp() {
        let record = FeedbackRecord::new("Tolle Stimmung!", Some("curl/8.0".to_string()));

        assert_eq!(record.partition_key, DEFAULT_PARTITION_KEY);
        assert!(Uuid::parse_str(&record.row_key).is_ok());
        assert_eq!(record.feedback_text, "Tolle Stimmung!");
        assert!(record.created_at.is_some());
        assert_eq!(record.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[test]
    fn test_new_generates_distinct_row_keys() {
        let a = FeedbackRecord::new("a", None);
        let b = FeedbackRecord::new("b", None);
        assert_ne!(a.row_key, b.row_key);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let record = FeedbackRecord {
            partition_key: "weihnachten".to_string(),
            row_key: "abc".to_string(),
            feedback_text: "Schön!".to_string(),
            created_at: None,
            user_agent: None,
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["partitionKey"], "weihnachten");
        assert_eq!(json["rowKey"], "abc");
        assert_eq!(json["feedbackText"], "Schön!");
        assert!(json["createdAt"].is_null());
        assert!(json["userAgent"].is_null());
    }

    #[test]
    fn test_deserializes_partial_row_with_defaults() {
        let json = r#"{"partitionKey":"weihnachten","rowKey":"abc"}"#;
        let record: FeedbackRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.feedback_text, "");
        assert_eq!(record.created_at, None);
        assert_eq!(record.user_agent, None);
    }

    #[test]
    fn test_with_partition_key() {
        let record = FeedbackRecord::new("x", None).with_partition_key("sommer");
        assert_eq!(record.partition_key, "sommer");
    }
}

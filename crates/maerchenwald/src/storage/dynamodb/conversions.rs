//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! feedback records. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use maerchenwald_core::feedback::FeedbackRecord;
use maerchenwald_core::storage::{RepositoryError, Result};

use super::query::{ATTR_PARTITION_KEY, ATTR_ROW_KEY};

/// Convert a feedback record to a DynamoDB item.
pub fn record_to_item(record: &FeedbackRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        ATTR_PARTITION_KEY.to_string(),
        AttributeValue::S(record.partition_key.clone()),
    );
    item.insert(
        ATTR_ROW_KEY.to_string(),
        AttributeValue::S(record.row_key.clone()),
    );

    // Data
    item.insert(
        "feedbackText".to_string(),
        AttributeValue::S(record.feedback_text.clone()),
    );
    if let Some(created_at) = &record.created_at {
        item.insert("createdAt".to_string(), AttributeValue::S(created_at.clone()));
    }
    if let Some(user_agent) = &record.user_agent {
        item.insert("userAgent".to_string(), AttributeValue::S(user_agent.clone()));
    }

    item
}

/// Convert a DynamoDB item to a feedback record.
///
/// The key attributes are required; `feedbackText` defaults to the empty
/// string and `createdAt`/`userAgent` to `None` when absent, so the
/// projection is always fully keyed even for legacy or partial rows.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<FeedbackRecord> {
    Ok(FeedbackRecord {
        partition_key: get_required(item, ATTR_PARTITION_KEY)?,
        row_key: get_required(item, ATTR_ROW_KEY)?,
        feedback_text: get_optional(item, "feedbackText").unwrap_or_default(),
        created_at: get_optional(item, "createdAt"),
        user_agent: get_optional(item, "userAgent"),
    })
}

fn get_required(item: &HashMap<String, AttributeValue>, attr: &'static str) -> Result<String> {
    item.get(attr)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            RepositoryError::Serialization(format!("missing or non-string attribute: {attr}"))
        })
}

fn get_optional(item: &HashMap<String, AttributeValue>, attr: &str) -> Option<String> {
    item.get(attr).and_then(|v| v.as_s().ok()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> FeedbackRecord {
        FeedbackRecord {
            partition_key: "weihnachten".to_string(),
            row_key: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            feedback_text: "Schön!".to_string(),
            created_at: Some("2024-12-24T18:00:00+00:00".to_string()),
            user_agent: Some("curl/8.0".to_string()),
        }
    }

    #[test]
    fn test_record_to_item_round_trip() {
        let record = sample_record();
        let item = record_to_item(&record);
        let back = item_to_record(&item).unwrap();

        assert_eq!(back, record);
    }

    #[test]
    fn test_optional_attributes_omitted_when_absent() {
        let record = FeedbackRecord {
            created_at: None,
            user_agent: None,
            ..sample_record()
        };
        let item = record_to_item(&record);

        assert!(!item.contains_key("createdAt"));
        assert!(!item.contains_key("userAgent"));
    }

    #[test]
    fn test_partial_row_projects_with_defaults() {
        let mut item = HashMap::new();
        item.insert(
            ATTR_PARTITION_KEY.to_string(),
            AttributeValue::S("weihnachten".to_string()),
        );
        item.insert(ATTR_ROW_KEY.to_string(), AttributeValue::S("r1".to_string()));

        let record = item_to_record(&item).unwrap();

        assert_eq!(record.feedback_text, "");
        assert_eq!(record.created_at, None);
        assert_eq!(record.user_agent, None);
    }

    #[test]
    fn test_missing_key_attribute_is_an_error() {
        let mut item = HashMap::new();
        item.insert(ATTR_ROW_KEY.to_string(), AttributeValue::S("r1".to_string()));

        let err = item_to_record(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn test_non_string_attribute_is_an_error() {
        let mut item = HashMap::new();
        item.insert(
            ATTR_PARTITION_KEY.to_string(),
            AttributeValue::N("1".to_string()),
        );
        item.insert(ATTR_ROW_KEY.to_string(), AttributeValue::S("r1".to_string()));

        let err = item_to_record(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}

//! DynamoDB repository implementation.
//!
//! Implements `FeedbackRepository` from `maerchenwald_core::storage` using
//! DynamoDB: conditional insert-only puts and partition-scoped queries with
//! bounded pagination.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use maerchenwald_core::feedback::FeedbackRecord;
use maerchenwald_core::storage::{FeedbackRepository, RepositoryError, Result};

use crate::config::TableCredentials;

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_create_table_error, map_put_item_error, map_query_error};
use super::query::{
    insert_only_condition, partition_key_condition, remaining_limit, ATTR_PARTITION_KEY,
    ATTR_ROW_KEY, PARTITION_VALUE_PLACEHOLDER,
};

/// DynamoDB-backed feedback repository.
pub struct DynamoDbFeedbackRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbFeedbackRepository {
    /// Creates a repository with an existing DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Connects to the table store with credentials resolved at startup.
    ///
    /// A connection string selects a custom endpoint (local DynamoDB or a
    /// compatible gateway) on top of the SDK default chain; an account/key
    /// pair selects static credentials against the default endpoint.
    pub async fn connect(credentials: &TableCredentials, table_name: impl Into<String>) -> Self {
        let loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        let sdk_config = match credentials {
            TableCredentials::ConnectionString(endpoint) => {
                loader.endpoint_url(endpoint).load().await
            }
            TableCredentials::AccountKey { account, key } => {
                loader
                    .credentials_provider(aws_sdk_dynamodb::config::Credentials::from_keys(
                        account, key, None,
                    ))
                    .load()
                    .await
            }
        };

        Self::new(Client::new(&sdk_config), table_name)
    }
}

#[async_trait]
impl FeedbackRepository for DynamoDbFeedbackRepository {
    async fn ensure_table(&self) -> Result<()> {
        let result = self
            .client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(ATTR_PARTITION_KEY)
                    .key_type(KeyType::Hash)
                    .build()
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))?,
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(ATTR_ROW_KEY)
                    .key_type(KeyType::Range)
                    .build()
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))?,
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(ATTR_PARTITION_KEY)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))?,
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(ATTR_ROW_KEY)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))?,
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => match map_create_table_error(err) {
                None => Ok(()),
                Some(mapped) => Err(mapped),
            },
        }
    }

    async fn create_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let item = record_to_item(record);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(insert_only_condition())
            .send()
            .await
            .map_err(|e| map_put_item_error(e, record.row_key.clone()))?;

        Ok(())
    }

    async fn list_partition(
        &self,
        partition_key: &str,
        top: Option<u32>,
    ) -> Result<Vec<FeedbackRecord>> {
        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let mut request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression(partition_key_condition())
                .expression_attribute_values(
                    PARTITION_VALUE_PLACEHOLDER,
                    AttributeValue::S(partition_key.to_string()),
                );

            if let Some(limit) = remaining_limit(top, records.len()) {
                request = request.limit(limit);
            }
            if let Some(key) = exclusive_start_key.take() {
                request = request.set_exclusive_start_key(Some(key));
            }

            let result = request.send().await.map_err(map_query_error)?;

            for item in result.items() {
                records.push(item_to_record(item)?);
                if top.is_some_and(|t| records.len() >= t as usize) {
                    return Ok(records);
                }
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => return Ok(records),
            }
        }
    }
}

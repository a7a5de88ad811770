//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use maerchenwald_core::feedback::FeedbackRecord;
use maerchenwald_core::storage::{FeedbackRepository, RepositoryError, Result};

/// In-memory feedback store for tests and local development.
///
/// Records are grouped by partition key and kept in insertion order,
/// mirroring the forward-only enumeration of the real table store. Data is
/// lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    partitions: Arc<RwLock<HashMap<String, Vec<FeedbackRecord>>>>,
}

impl InMemoryFeedbackRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn ensure_table(&self) -> Result<()> {
        Ok(())
    }

    async fn create_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        let rows = partitions.entry(record.partition_key.clone()).or_default();

        if rows.iter().any(|r| r.row_key == record.row_key) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "FeedbackRecord",
                id: record.row_key.clone(),
            });
        }

        rows.push(record.clone());
        Ok(())
    }

    async fn list_partition(
        &self,
        partition_key: &str,
        top: Option<u32>,
    ) -> Result<Vec<FeedbackRecord>> {
        let partitions = self.partitions.read().await;
        let rows = partitions
            .get(partition_key)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let cap = top.map(|t| t as usize).unwrap_or(rows.len());
        Ok(rows.iter().take(cap).cloned().collect())
    }
}

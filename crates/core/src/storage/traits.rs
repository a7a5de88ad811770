use async_trait::async_trait;

use crate::feedback::FeedbackRecord;

use super::Result;

/// Repository for feedback records in the partitioned table store.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Guarantees the backing table exists.
    ///
    /// Idempotent: an "already exists" outcome from the store is success,
    /// so the bootstrap is safe to run on every startup.
    async fn ensure_table(&self) -> Result<()>;

    /// Persists one feedback record.
    ///
    /// Insert-only: fails with `RepositoryError::AlreadyExists` when the
    /// `(partition_key, row_key)` pair is already present, rather than
    /// overwriting the stored record.
    async fn create_feedback(&self, record: &FeedbackRecord) -> Result<()>;

    /// Lists records in a partition, in the store's native return order.
    ///
    /// When `top` is given the enumeration stops at the cap without
    /// fetching pages beyond what is needed; `None` returns all matches.
    async fn list_partition(
        &self,
        partition_key: &str,
        top: Option<u32>,
    ) -> Result<Vec<FeedbackRecord>>;
}

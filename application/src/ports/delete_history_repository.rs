//! Deletion history repository port

use super::repository::RepositoryError;
use async_trait::async_trait;
use qna_domain::DeleteHistory;

/// Append-only storage for [`DeleteHistory`] records
#[async_trait]
pub trait DeleteHistoryRepository: Send + Sync {
    /// Append all records, keeping their order. Either all are stored or none.
    async fn save_all(&self, histories: &[DeleteHistory]) -> Result<(), RepositoryError>;

    /// Every record in the order it was saved
    async fn find_all(&self) -> Result<Vec<DeleteHistory>, RepositoryError>;
}

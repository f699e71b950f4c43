//! Deletion history query

use crate::ports::delete_history_repository::DeleteHistoryRepository;
use crate::ports::repository::RepositoryError;
use qna_domain::DeleteHistory;
use std::sync::Arc;

/// Use case for reading the deletion history
pub struct ListDeleteHistoriesUseCase {
    histories: Arc<dyn DeleteHistoryRepository>,
}

impl ListDeleteHistoriesUseCase {
    pub fn new(histories: Arc<dyn DeleteHistoryRepository>) -> Self {
        Self { histories }
    }

    pub async fn execute(&self) -> Result<Vec<DeleteHistory>, RepositoryError> {
        self.histories.find_all().await
    }
}

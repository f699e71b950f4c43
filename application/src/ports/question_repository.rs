//! Question repository port

use super::repository::RepositoryError;
use async_trait::async_trait;
use qna_domain::{Question, QuestionId};

/// Persistence for [`Question`] aggregates, answers included
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert or replace a question.
    ///
    /// Assigns an id to the question and to each of its answers that lack one,
    /// bumps the revision, and returns the stored aggregate. Replacing a
    /// question loaded at an older revision than the stored one fails with
    /// [`RepositoryError::Conflict`]; see [`check_revision`].
    async fn save(&self, question: Question) -> Result<Question, RepositoryError>;

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// Find a question only while it has not been deleted
    async fn find_by_id_and_deleted_false(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, RepositoryError> {
        Ok(self.find_by_id(id).await?.filter(|q| !q.is_deleted()))
    }

    /// All live questions in id order
    async fn find_by_deleted_false(&self) -> Result<Vec<Question>, RepositoryError>;
}

/// Refuse to replace `stored` with a question loaded at a different revision
pub fn check_revision(
    stored: Option<&Question>,
    incoming: &Question,
) -> Result<(), RepositoryError> {
    match stored {
        Some(stored) if stored.version() != incoming.version() => {
            Err(RepositoryError::Conflict(format!(
                "question {} changed since it was loaded (revision {}, stored {})",
                stored.id().map(|id| id.to_string()).unwrap_or_default(),
                incoming.version(),
                stored.version()
            )))
        }
        _ => Ok(()),
    }
}

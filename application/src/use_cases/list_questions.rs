//! Question queries

use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::RepositoryError;
use qna_domain::{Question, QuestionId};
use std::sync::Arc;

/// Use case for reading questions
pub struct ListQuestionsUseCase {
    questions: Arc<dyn QuestionRepository>,
}

impl ListQuestionsUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Every live question
    pub async fn execute(&self) -> Result<Vec<Question>, RepositoryError> {
        self.questions.find_by_deleted_false().await
    }

    /// A single question, deleted or not
    pub async fn find(&self, id: QuestionId) -> Result<Question, RepositoryError> {
        self.questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("question", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::FakeStore;

    #[tokio::test]
    async fn test_deleted_questions_are_hidden_from_list_but_findable() {
        let store = Arc::new(FakeStore::default());
        let owner = store.add_user("javajigi").await;
        let kept = QuestionRepository::save(
            store.as_ref(),
            Question::new("kept", "").write_by(owner.clone()),
        )
        .await
        .unwrap();
        let mut gone = QuestionRepository::save(
            store.as_ref(),
            Question::new("gone", "").write_by(owner.clone()),
        )
        .await
        .unwrap();
        gone.delete(&owner).unwrap();
        let gone = QuestionRepository::save(store.as_ref(), gone).await.unwrap();

        let uc = ListQuestionsUseCase::new(store.clone());
        assert_eq!(uc.execute().await.unwrap(), vec![kept]);
        assert!(uc.find(gone.id().unwrap()).await.unwrap().is_deleted());
        assert!(uc.find(QuestionId(999)).await.unwrap_err().is_not_found());
    }
}

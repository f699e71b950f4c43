//! Delete Question use case
//!
//! Soft-deletes a question together with its answers and records the
//! resulting deletion history.

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::delete_history_repository::DeleteHistoryRepository;
use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use crate::use_cases::shared::find_user;
use qna_domain::{DeleteHistory, DomainError, Question, QuestionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while deleting a question
#[derive(Error, Debug)]
pub enum DeleteQuestionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The question was stored as deleted, its history was not, and writing
    /// the live question back failed too.
    #[error(
        "question {question_id} is stored as deleted without deletion history \
         (history write failed: {history}; restore failed: {restore})"
    )]
    Inconsistent {
        question_id: QuestionId,
        history: RepositoryError,
        restore: RepositoryError,
    },
}

impl DeleteQuestionError {
    /// The acting user lacks permission (map to access-denied)
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, DeleteQuestionError::Domain(e) if e.is_permission_denied())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DeleteQuestionError::Repository(e) if e.is_not_found())
    }

    /// Another writer changed the question between load and save
    pub fn is_conflict(&self) -> bool {
        matches!(self, DeleteQuestionError::Repository(e) if e.is_conflict())
    }
}

/// Input for the [`DeleteQuestionUseCase`]
#[derive(Debug, Clone)]
pub struct DeleteQuestionInput {
    pub question_id: QuestionId,
    /// Login id of the user requesting the delete
    pub login_user: String,
}

impl DeleteQuestionInput {
    pub fn new(question_id: QuestionId, login_user: impl Into<String>) -> Self {
        Self {
            question_id,
            login_user: login_user.into(),
        }
    }
}

/// Result of a successful delete
#[derive(Debug, Clone)]
pub struct DeleteQuestionOutput {
    /// The question as stored after the delete
    pub question: Question,
    /// Answer records first, then the question's own record
    pub histories: Vec<DeleteHistory>,
}

/// Use case for deleting a question.
///
/// 1. Resolve the acting user and the live question
/// 2. Apply [`Question::delete`] to a working copy
/// 3. Store the question, then the histories
///
/// The two writes form one unit: if the histories cannot be stored, the
/// question is written back as it was before the delete. Saves are checked
/// against the revision the question was loaded at, so a concurrent delete
/// or answer fails with a conflict instead of overwriting the other write.
pub struct DeleteQuestionUseCase {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
    histories: Arc<dyn DeleteHistoryRepository>,
    audit: Arc<dyn AuditLogger>,
}

impl DeleteQuestionUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        questions: Arc<dyn QuestionRepository>,
        histories: Arc<dyn DeleteHistoryRepository>,
    ) -> Self {
        Self {
            users,
            questions,
            histories,
            audit: Arc::new(NoAuditLogger),
        }
    }

    /// Create with an audit logger.
    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub async fn execute(
        &self,
        input: DeleteQuestionInput,
    ) -> Result<DeleteQuestionOutput, DeleteQuestionError> {
        info!(
            "Deleting question {} as {}",
            input.question_id, input.login_user
        );

        let login_user = find_user(self.users.as_ref(), &input.login_user).await?;
        let original = self
            .questions
            .find_by_id_and_deleted_false(input.question_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("question", input.question_id))?;

        let mut question = original.clone();
        let histories = question.delete(&login_user).inspect_err(|e| {
            debug!("Delete of question {} refused: {}", input.question_id, e);
        })?;

        let question = self.questions.save(question).await?;

        if let Err(history) = self.histories.save_all(&histories).await {
            warn!(
                "Could not store deletion history for question {}: {}; restoring question",
                input.question_id, history
            );
            let mut original = original;
            original.assign_version(question.version());
            if let Err(restore) = self.questions.save(original).await {
                error!(
                    "Question {} left deleted without history: {}",
                    input.question_id, restore
                );
                return Err(DeleteQuestionError::Inconsistent {
                    question_id: input.question_id,
                    history,
                    restore,
                });
            }
            return Err(history.into());
        }

        for history in &histories {
            self.audit.log(AuditEvent::new(
                "content_deleted",
                serde_json::json!({
                    "content_type": history.content_type(),
                    "content_id": history.content_id(),
                    "deleted_by": history.deleted_by().user_id(),
                }),
            ));
        }

        info!(
            "Question {} deleted ({} history records)",
            input.question_id,
            histories.len()
        );

        Ok(DeleteQuestionOutput {
            question,
            histories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::testing::{FakeStore, RecordingAuditLogger};
    use crate::use_cases::update_user::{UpdateUserInput, UpdateUserUseCase};
    use qna_domain::{Answer, ContentType, User};

    async fn seeded() -> (Arc<FakeStore>, User, User, QuestionId) {
        let store = Arc::new(FakeStore::default());
        let owner = store.add_user("javajigi").await;
        let stranger = store.add_user("sanjigi").await;

        let mut question = Question::new("title", "contents").write_by(owner.clone());
        question.add_answer(Answer::new(None, owner.clone(), None, "self answer"));
        let question = QuestionRepository::save(store.as_ref(), question)
            .await
            .unwrap();

        (store, owner, stranger, question.id().unwrap())
    }

    fn use_case(store: &Arc<FakeStore>) -> DeleteQuestionUseCase {
        DeleteQuestionUseCase::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_owner_deletes_question_and_answers() {
        let (store, owner, _, id) = seeded().await;
        let audit = Arc::new(RecordingAuditLogger::default());

        let output = use_case(&store)
            .with_audit_logger(audit.clone())
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap();

        assert!(output.question.is_deleted());
        assert_eq!(output.histories.len(), 2);
        assert_eq!(output.histories[0].content_type(), ContentType::Answer);
        assert_eq!(
            output.histories[1],
            DeleteHistory::new(ContentType::Question, Some(id.0), owner)
        );

        let stored = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_deleted());
        assert_eq!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap(),
            output.histories
        );
        assert_eq!(audit.event_types(), vec!["content_deleted"; 2]);
    }

    #[tokio::test]
    async fn test_stranger_is_denied_and_nothing_changes() {
        let (store, _, _, id) = seeded().await;

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "sanjigi"))
            .await
            .unwrap_err();

        assert!(err.is_permission_denied());
        let stored = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_deleted());
        assert!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_foreign_answer_blocks_delete() {
        let (store, _, stranger, id) = seeded().await;
        let mut question = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        question.add_answer(Answer::new(None, stranger, None, "other answer"));
        QuestionRepository::save(store.as_ref(), question)
            .await
            .unwrap();

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap_err();

        assert!(err.is_permission_denied());
    }

    #[tokio::test]
    async fn test_deleted_question_is_not_found() {
        let (store, _, _, id) = seeded().await;
        let uc = use_case(&store);
        uc.execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap();

        let err = uc
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (store, _, _, id) = seeded().await;

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "nobody"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[tokio::test]
    async fn test_owner_can_delete_after_editing_profile() {
        let (store, _, _, id) = seeded().await;
        UpdateUserUseCase::new(store.clone())
            .execute(UpdateUserInput {
                user_id: "javajigi".to_string(),
                login_user: "javajigi".to_string(),
                password: "password".to_string(),
                name: "renamed".to_string(),
                email: Some("renamed@slipp.net".to_string()),
            })
            .await
            .unwrap();

        let output = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap();

        assert!(output.question.is_deleted());
        assert_eq!(output.histories.len(), 2);
        assert_eq!(output.histories[1].deleted_by().name(), "renamed");
    }

    #[tokio::test]
    async fn test_concurrent_answer_makes_delete_conflict() {
        let (store, owner, _, id) = seeded().await;
        let mut answered = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        answered.add_answer(Answer::new(None, owner, None, "late answer"));
        store.interleave_question_write(answered);

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        let stored = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_deleted());
        assert_eq!(stored.answers().len(), 2);
        assert!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_stale_copy_cannot_overwrite_delete() {
        let (store, owner, _, id) = seeded().await;
        let mut stale = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();

        use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap();

        // A second delete racing on the copy loaded before the first one
        let histories = stale.delete(&owner).unwrap();
        assert_eq!(histories.len(), 2);
        let err = QuestionRepository::save(store.as_ref(), stale)
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_failed_restore_reports_inconsistent_state() {
        let (store, _, _, id) = seeded().await;
        store.fail_history_writes();
        store.fail_question_writes_after(1);

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DeleteQuestionError::Inconsistent { question_id, .. } if question_id == id
        ));
        assert!(err.to_string().contains("without deletion history"));
        let stored = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_deleted());
        assert!(
            DeleteHistoryRepository::find_all(store.as_ref())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_history_failure_restores_question() {
        let (store, _, _, id) = seeded().await;
        store.fail_history_writes();

        let err = use_case(&store)
            .execute(DeleteQuestionInput::new(id, "javajigi"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DeleteQuestionError::Repository(RepositoryError::Storage(_))
        ));
        let stored = QuestionRepository::find_by_id(store.as_ref(), id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_deleted());
        assert!(stored.answers().iter().all(|a| !a.is_deleted()));
    }
}

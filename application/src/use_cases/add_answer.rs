//! Add Answer use case

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use crate::use_cases::shared::find_user;
use qna_domain::{Answer, QuestionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum AddAnswerError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Answer contents cannot be empty")]
    EmptyContents,
}

/// Input for the [`AddAnswerUseCase`]
#[derive(Debug, Clone)]
pub struct AddAnswerInput {
    pub question_id: QuestionId,
    /// Login id of the answer's writer
    pub writer: String,
    pub contents: String,
}

impl AddAnswerInput {
    pub fn new(
        question_id: QuestionId,
        writer: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            writer: writer.into(),
            contents: contents.into(),
        }
    }
}

/// Use case for answering a live question
pub struct AddAnswerUseCase {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
    audit: Arc<dyn AuditLogger>,
}

impl AddAnswerUseCase {
    pub fn new(users: Arc<dyn UserRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            users,
            questions,
            audit: Arc::new(NoAuditLogger),
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Append the answer and return it as stored
    pub async fn execute(&self, input: AddAnswerInput) -> Result<Answer, AddAnswerError> {
        if input.contents.trim().is_empty() {
            return Err(AddAnswerError::EmptyContents);
        }

        let writer = find_user(self.users.as_ref(), &input.writer).await?;
        let mut question = self
            .questions
            .find_by_id_and_deleted_false(input.question_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("question", input.question_id))?;

        question.add_answer(Answer::new(
            None,
            writer,
            Some(input.question_id),
            input.contents,
        ));
        let question = self.questions.save(question).await?;

        let answer = question
            .answers()
            .iter()
            .last()
            .cloned()
            .ok_or_else(|| RepositoryError::Storage("answer was not stored".to_string()))?;

        info!(
            "Answer added to question {} by {}",
            input.question_id, input.writer
        );
        self.audit.log(AuditEvent::new(
            "answer_added",
            serde_json::json!({
                "question_id": input.question_id,
                "answer_id": answer.id(),
                "writer": input.writer,
            }),
        ));
        Ok(answer)
    }
}

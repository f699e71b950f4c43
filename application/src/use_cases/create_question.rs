//! Create Question use case

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::question_repository::QuestionRepository;
use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use crate::use_cases::shared::find_user;
use qna_domain::{DomainError, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CreateQuestionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the [`CreateQuestionUseCase`]
#[derive(Debug, Clone)]
pub struct CreateQuestionInput {
    /// Login id of the writer
    pub writer: String,
    pub title: String,
    pub contents: String,
}

impl CreateQuestionInput {
    pub fn new(
        writer: impl Into<String>,
        title: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            writer: writer.into(),
            title: title.into(),
            contents: contents.into(),
        }
    }
}

/// Use case for posting a new question
pub struct CreateQuestionUseCase {
    users: Arc<dyn UserRepository>,
    questions: Arc<dyn QuestionRepository>,
    audit: Arc<dyn AuditLogger>,
}

impl CreateQuestionUseCase {
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

    pub async fn execute(
        &self,
        input: CreateQuestionInput,
    ) -> Result<Question, CreateQuestionError> {
        let writer = find_user(self.users.as_ref(), &input.writer).await?;
        let question = Question::try_new(input.title, input.contents)?.write_by(writer);
        let question = self.questions.save(question).await?;

        if let Some(id) = question.id() {
            info!("Question {} posted by {}", id, input.writer);
            self.audit.log(AuditEvent::new(
                "question_created",
                serde_json::json!({ "question_id": id, "writer": input.writer }),
            ));
        }
        Ok(question)
    }
}

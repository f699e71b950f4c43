//! Answer entity

use super::value_objects::{AnswerId, QuestionId};
use crate::core::error::DomainError;
use crate::core::timestamps::Timestamps;
use crate::history::content_type::ContentType;
use crate::history::entities::DeleteHistory;
use crate::user::entities::User;
use serde::{Deserialize, Serialize};

/// An answer posted under a question (Entity)
///
/// Authorship is independent of the question's writer. The question is
/// referenced by id only; the owning [`Answers`](super::answers::Answers)
/// collection lives inside the question aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    id: Option<AnswerId>,
    writer: User,
    question_id: Option<QuestionId>,
    contents: String,
    deleted: bool,
    #[serde(default)]
    timestamps: Timestamps,
}

impl Answer {
    pub fn new(
        id: Option<AnswerId>,
        writer: User,
        question_id: Option<QuestionId>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            id,
            writer,
            question_id,
            contents: contents.into(),
            deleted: false,
            timestamps: Timestamps::now(),
        }
    }

    pub fn id(&self) -> Option<AnswerId> {
        self.id
    }

    /// Assign the storage identity. Has no effect once an id is set.
    pub fn assign_id(&mut self, id: AnswerId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    pub fn writer(&self) -> &User {
        &self.writer
    }

    pub fn question_id(&self) -> Option<QuestionId> {
        self.question_id
    }

    /// Attach this answer to a question
    pub fn to_question(&mut self, question_id: QuestionId) {
        self.question_id = Some(question_id);
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    pub fn is_owner(&self, user: &User) -> bool {
        self.writer == *user
    }

    /// Refuse unless `login_user` wrote this answer. Does not mutate.
    pub fn validate_owner(&self, login_user: &User) -> Result<(), DomainError> {
        if !self.is_owner(login_user) {
            return Err(DomainError::CannotDelete(
                "you are not allowed to delete this answer".to_string(),
            ));
        }
        Ok(())
    }

    /// Soft-delete this answer on behalf of `login_user`
    pub fn delete(&mut self, login_user: &User) -> Result<DeleteHistory, DomainError> {
        self.validate_owner(login_user)?;
        self.deleted = true;
        self.timestamps.touch();
        Ok(DeleteHistory::new(
            ContentType::Answer,
            self.id.map(|id| id.0),
            login_user.clone(),
        ))
    }
}

impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.writer == other.writer
            && self.question_id == other.question_id
            && self.contents == other.contents
            && self.deleted == other.deleted
    }
}

impl Eq for Answer {}

impl std::hash::Hash for Answer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.writer.hash(state);
        self.question_id.hash(state);
        self.contents.hash(state);
        self.deleted.hash(state);
    }
}

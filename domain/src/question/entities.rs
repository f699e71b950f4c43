//! Question aggregate root

use super::answer::Answer;
use super::answers::Answers;
use super::value_objects::{AnswerId, QuestionId, title_violation};
use crate::core::error::DomainError;
use crate::core::timestamps::Timestamps;
use crate::history::content_type::ContentType;
use crate::history::entities::DeleteHistory;
use crate::user::entities::User;
use serde::{Deserialize, Serialize};

/// A question posted on the board (Aggregate Root)
///
/// Owns its [`Answers`]. The only state transition is active → deleted,
/// reached through [`Question::delete`] and never reversed.
///
/// Equality and hash cover `id`, `title`, `contents`, `deleted`, `writer` and
/// `answers`. Several of those change over the entity's lifetime, so a
/// `Question` must not be used as a map or set key across a mutation.
///
/// `version` is the storage revision the question was loaded at. Storage
/// refuses to save a question whose revision is behind the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: Option<QuestionId>,
    title: String,
    contents: String,
    deleted: bool,
    writer: Option<User>,
    answers: Answers,
    #[serde(default)]
    version: u64,
    #[serde(default)]
    timestamps: Timestamps,
}

impl Question {
    /// Create a question not yet known to storage
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self::build(None, title.into(), contents.into())
    }

    /// Create a question with an explicit identity (e.g. when rehydrating)
    pub fn with_id(
        id: QuestionId,
        title: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self::build(Some(id), title.into(), contents.into())
    }

    /// Create a question, rejecting titles that are empty or too long
    pub fn try_new(
        title: impl Into<String>,
        contents: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if let Some(reason) = title_violation(&title) {
            return Err(DomainError::InvalidTitle(reason));
        }
        Ok(Self::build(None, title, contents.into()))
    }

    fn build(id: Option<QuestionId>, title: String, contents: String) -> Self {
        Self {
            id,
            title,
            contents,
            deleted: false,
            writer: None,
            answers: Answers::new(),
            version: 0,
            timestamps: Timestamps::now(),
        }
    }

    /// Set the owning user
    pub fn write_by(mut self, writer: User) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Append an answer. No deduplication and no ownership check.
    pub fn add_answer(&mut self, mut answer: Answer) {
        if let Some(id) = self.id {
            answer.to_question(id);
        }
        self.answers.add(answer);
    }

    /// Soft-delete this question and every live answer under it.
    ///
    /// Refuses with [`DomainError::CannotDelete`] unless `login_user` wrote the
    /// question and every live answer. An owner deleting an already deleted
    /// question gets [`DomainError::AlreadyDeleted`]. Nothing is mutated on
    /// failure.
    ///
    /// Returns the answer histories in insertion order followed by the
    /// question's own record.
    pub fn delete(&mut self, login_user: &User) -> Result<Vec<DeleteHistory>, DomainError> {
        self.validate_owner(login_user)?;
        if self.deleted {
            return Err(DomainError::AlreadyDeleted {
                content_type: ContentType::Question,
                id: self.id.map(|id| id.0),
            });
        }

        let mut histories = self.answers.delete(login_user)?;
        self.deleted = true;
        self.timestamps.touch();
        histories.push(DeleteHistory::new(
            ContentType::Question,
            self.id.map(|id| id.0),
            login_user.clone(),
        ));
        Ok(histories)
    }

    fn validate_owner(&self, login_user: &User) -> Result<(), DomainError> {
        if !self.is_owner(login_user) {
            return Err(DomainError::CannotDelete(
                "you are not allowed to delete this question".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `candidate` wrote this question. False while no writer is set.
    pub fn is_owner(&self, candidate: &User) -> bool {
        self.writer.as_ref() == Some(candidate)
    }

    pub fn id(&self) -> Option<QuestionId> {
        self.id
    }

    /// Assign the storage identity and attach the answers to it.
    /// Has no effect once an id is set.
    pub fn assign_id(&mut self, id: QuestionId) {
        if self.id.is_some() {
            return;
        }
        self.id = Some(id);
        for answer in self.answers.iter_mut() {
            answer.to_question(id);
        }
    }

    /// Give every unsaved answer an identity drawn from `next_id`
    pub fn assign_answer_ids(&mut self, mut next_id: impl FnMut() -> AnswerId) {
        for answer in self.answers.iter_mut().filter(|a| a.id().is_none()) {
            answer.assign_id(next_id());
        }
    }

    /// Storage revision; 0 until first saved
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Set the storage revision. Called by storage after a successful save,
    /// and when writing an earlier state back on top of revision `version`.
    pub fn assign_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn writer(&self) -> Option<&User> {
        self.writer.as_ref()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.contents == other.contents
            && self.deleted == other.deleted
            && self.title == other.title
            && self.answers == other.answers
            && self.writer == other.writer
    }
}

impl Eq for Question {}

impl std::hash::Hash for Question {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.contents.hash(state);
        self.deleted.hash(state);
        self.title.hash(state);
        self.answers.hash(state);
        self.writer.hash(state);
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} {}", id, self.title)?,
            None => write!(f, "#? {}", self.title)?,
        }
        if self.deleted {
            write!(f, " [deleted]")?;
        }
        Ok(())
    }
}

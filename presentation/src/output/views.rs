//! Serializable views of domain entities.
//!
//! Views omit credentials and flatten identities, so JSON output never
//! exposes a user's password.

use qna_domain::{Answer, ContentType, DeleteHistory, Question, User};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: Option<i64>,
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().map(|id| id.0),
            user_id: user.user_id().to_string(),
            name: user.name().to_string(),
            email: user.email().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerView {
    pub id: Option<i64>,
    pub question_id: Option<i64>,
    pub writer: String,
    pub contents: String,
    pub deleted: bool,
}

impl From<&Answer> for AnswerView {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id().map(|id| id.0),
            question_id: answer.question_id().map(|id| id.0),
            writer: answer.writer().user_id().to_string(),
            contents: answer.contents().to_string(),
            deleted: answer.is_deleted(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: Option<i64>,
    pub title: String,
    pub contents: String,
    pub deleted: bool,
    pub writer: Option<String>,
    pub created_at: String,
    pub answers: Vec<AnswerView>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().map(|id| id.0),
            title: question.title().to_string(),
            contents: question.contents().to_string(),
            deleted: question.is_deleted(),
            writer: question.writer().map(|w| w.user_id().to_string()),
            created_at: question.timestamps().created_at().to_rfc3339(),
            answers: question.answers().iter().map(AnswerView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteHistoryView {
    pub content_type: ContentType,
    pub content_id: Option<i64>,
    pub deleted_by: String,
    pub created_at: String,
}

impl From<&DeleteHistory> for DeleteHistoryView {
    fn from(history: &DeleteHistory) -> Self {
        Self {
            content_type: history.content_type(),
            content_id: history.content_id(),
            deleted_by: history.deleted_by().user_id().to_string(),
            created_at: history.created_at().to_rfc3339(),
        }
    }
}

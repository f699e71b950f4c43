//! JSON output formatter

use super::formatter::OutputFormatter;
use super::views::{AnswerView, DeleteHistoryView, QuestionView, UserView};
use qna_domain::{Answer, DeleteHistory, Question, User};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("Failed to serialize output: {}", e) })
                .to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn user(&self, user: &User) -> String {
        Self::render(&UserView::from(user))
    }

    fn users(&self, users: &[User]) -> String {
        Self::render(&users.iter().map(UserView::from).collect::<Vec<_>>())
    }

    fn question(&self, question: &Question) -> String {
        Self::render(&QuestionView::from(question))
    }

    fn questions(&self, questions: &[Question]) -> String {
        Self::render(&questions.iter().map(QuestionView::from).collect::<Vec<_>>())
    }

    fn answer(&self, answer: &Answer) -> String {
        Self::render(&AnswerView::from(answer))
    }

    fn histories(&self, histories: &[DeleteHistory]) -> String {
        Self::render(
            &histories
                .iter()
                .map(DeleteHistoryView::from)
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qna_domain::{ContentType, QuestionId, UserId};

    fn javajigi() -> User {
        User::new(Some(UserId(1)), "javajigi", "s3cret", "Jaesung", None)
    }

    #[test]
    fn test_user_json_hides_password() {
        let json = JsonFormatter.user(&javajigi());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["user_id"], "javajigi");
        assert!(value.get("password").is_none());
        assert!(!json.contains("s3cret"));
    }

    #[test]
    fn test_question_json() {
        let mut question = Question::with_id(QuestionId(1), "title", "contents").write_by(javajigi());
        question.add_answer(Answer::new(None, javajigi(), None, "answer"));

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.question(&question)).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["writer"], "javajigi");
        assert_eq!(value["deleted"], false);
        assert_eq!(value["answers"][0]["question_id"], 1);
    }

    #[test]
    fn test_histories_json() {
        let histories = vec![DeleteHistory::new(
            ContentType::Question,
            Some(1),
            javajigi(),
        )];
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.histories(&histories)).unwrap();
        assert_eq!(value[0]["content_type"], "QUESTION");
        assert_eq!(value[0]["deleted_by"], "javajigi");
    }
}

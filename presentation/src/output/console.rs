//! Console output formatter

use super::formatter::OutputFormatter;
use colored::Colorize;
use qna_domain::{Answer, DeleteHistory, Question, User};

/// Longest contents excerpt shown in listings, in characters
const PREVIEW_CHARS: usize = 60;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a section header
    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "─".repeat(60).dimmed())
    }

    fn preview(text: &str) -> String {
        let line = text.lines().next().unwrap_or_default();
        if line.chars().count() > PREVIEW_CHARS || text.lines().count() > 1 {
            let cut: String = line.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", cut)
        } else {
            line.to_string()
        }
    }

    fn id_label(id: Option<i64>) -> String {
        id.map(|id| format!("#{}", id))
            .unwrap_or_else(|| "#?".to_string())
    }

    fn answer_line(answer: &Answer) -> String {
        let status = if answer.is_deleted() {
            " [deleted]".red().to_string()
        } else {
            String::new()
        };
        format!(
            "  {} {}{}\n    {}\n",
            Self::id_label(answer.id().map(|id| id.0)).yellow(),
            answer.writer().user_id().bold(),
            status,
            answer.contents()
        )
    }

    /// Message shown when an operation is refused for lack of permission
    pub fn access_denied(message: &str) -> String {
        format!("{} {}", "Access denied:".red().bold(), message)
    }

    /// Message shown when a referenced user or question does not exist
    pub fn not_found(message: &str) -> String {
        format!("{} {}", "Not found:".yellow().bold(), message)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn user(&self, user: &User) -> String {
        let email = user.email().unwrap_or("-");
        format!(
            "{} {}  {}  {}",
            Self::id_label(user.id().map(|id| id.0)).yellow(),
            user.user_id().bold(),
            user.name(),
            email.dimmed()
        )
    }

    fn users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users registered.".dimmed().to_string();
        }
        let mut output = Self::header("Users");
        for user in users {
            output.push_str(&self.user(user));
            output.push('\n');
        }
        output
    }

    fn question(&self, question: &Question) -> String {
        let mut output = String::new();
        let label = Self::id_label(question.id().map(|id| id.0));
        output.push_str(&Self::header(&format!("{} {}", label, question.title())));

        let writer = question
            .writer()
            .map(|w| w.user_id().to_string())
            .unwrap_or_else(|| "(no writer)".to_string());
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Writer:".cyan(),
            writer,
            "Posted:".cyan(),
            question.timestamps().created_at().format("%Y-%m-%d %H:%M")
        ));
        if question.is_deleted() {
            output.push_str(&format!("{}\n", "This question has been deleted.".red()));
        }
        if !question.contents().is_empty() {
            output.push_str(&format!("\n{}\n", question.contents()));
        }

        output.push_str(&format!(
            "\n{} ({})\n",
            "Answers".cyan().bold(),
            question.answers().len()
        ));
        for answer in question.answers() {
            output.push_str(&Self::answer_line(answer));
        }
        output
    }

    fn questions(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return "No questions yet.".dimmed().to_string();
        }
        let mut output = Self::header("Questions");
        for question in questions {
            let writer = question.writer().map(|w| w.user_id()).unwrap_or("-");
            output.push_str(&format!(
                "{} {}  {} {}\n",
                Self::id_label(question.id().map(|id| id.0)).yellow(),
                question.title().bold(),
                format!("by {}", writer).dimmed(),
                format!("({} answers)", question.answers().active().count()).dimmed()
            ));
            if !question.contents().is_empty() {
                output.push_str(&format!("    {}\n", Self::preview(question.contents())));
            }
        }
        output
    }

    fn answer(&self, answer: &Answer) -> String {
        let question = Self::id_label(answer.question_id().map(|id| id.0));
        format!(
            "{} on question {}\n{}",
            "Answer posted".green().bold(),
            question,
            Self::answer_line(answer)
        )
    }

    fn histories(&self, histories: &[DeleteHistory]) -> String {
        if histories.is_empty() {
            return "No deletions recorded.".dimmed().to_string();
        }
        let mut output = Self::header("Deletion history");
        for history in histories {
            output.push_str(&format!(
                "{}  {:<8} {:<6} by {}\n",
                history.created_at().format("%Y-%m-%d %H:%M:%S"),
                history.content_type().to_string(),
                Self::id_label(history.content_id()),
                history.deleted_by().user_id()
            ));
        }
        output
    }
}

//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use crate::cli::commands::OutputFormat;
use qna_domain::{Answer, DeleteHistory, Question, User};

/// Trait for rendering command results
pub trait OutputFormatter {
    fn user(&self, user: &User) -> String;

    fn users(&self, users: &[User]) -> String;

    /// A single question with its answers
    fn question(&self, question: &Question) -> String;

    /// A one-line-per-question listing
    fn questions(&self, questions: &[Question]) -> String;

    fn answer(&self, answer: &Answer) -> String;

    fn histories(&self, histories: &[DeleteHistory]) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

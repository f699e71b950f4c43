//! Question value objects

use serde::{Deserialize, Serialize};

/// Maximum title length, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Storage-assigned identity of a [`Question`](super::entities::Question)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

/// Storage-assigned identity of an [`Answer`](super::answer::Answer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerId(pub i64);

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AnswerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a title against the board's rules, returning the reason it is rejected
pub fn title_violation(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        return Some("title cannot be empty".to_string());
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Some(format!(
            "title is {} characters, limit is {}",
            len, MAX_TITLE_LEN
        ));
    }
    None
}

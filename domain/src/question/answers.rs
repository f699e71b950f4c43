//! Embedded answer collection

use super::answer::Answer;
use crate::core::error::DomainError;
use crate::history::entities::DeleteHistory;
use crate::user::entities::User;
use serde::{Deserialize, Serialize};

/// Ordered answers of a single question
///
/// Only grows. Answers are soft-deleted in place, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(Vec<Answer>);

impl Answers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, answer: Answer) {
        self.0.push(answer);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Answer> {
        self.0.iter_mut()
    }

    /// Answers that have not been deleted
    pub fn active(&self) -> impl Iterator<Item = &Answer> {
        self.0.iter().filter(|a| !a.is_deleted())
    }

    /// Soft-delete every live answer on behalf of `login_user`.
    ///
    /// All ownership checks run before the first mutation, so a refusal leaves
    /// every answer untouched. Already deleted answers are skipped. Histories
    /// come back in insertion order.
    pub fn delete(&mut self, login_user: &User) -> Result<Vec<DeleteHistory>, DomainError> {
        for answer in self.active() {
            answer.validate_owner(login_user)?;
        }

        let mut histories = Vec::with_capacity(self.0.len() + 1);
        for answer in self.0.iter_mut().filter(|a| !a.is_deleted()) {
            histories.push(answer.delete(login_user)?);
        }
        Ok(histories)
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Domain error types

use crate::history::content_type::ContentType;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The acting user does not own the question or one of its answers.
    #[error("Cannot delete: {0}")]
    CannotDelete(String),

    /// The acting user may not modify another user's profile.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("{content_type} {} is already deleted", display_id(.id))]
    AlreadyDeleted {
        content_type: ContentType,
        id: Option<i64>,
    },
}

fn display_id(id: &Option<i64>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "(unsaved)".to_string(),
    }
}

impl DomainError {
    /// Check if this error is an access-denied condition
    ///
    /// Callers map these to a "forbidden" response instead of an internal error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            DomainError::CannotDelete(_) | DomainError::Unauthorized(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_delete_display() {
        let error = DomainError::CannotDelete("not yours".to_string());
        assert_eq!(error.to_string(), "Cannot delete: not yours");
    }

    #[test]
    fn test_already_deleted_display() {
        let error = DomainError::AlreadyDeleted {
            content_type: ContentType::Question,
            id: Some(7),
        };
        assert_eq!(error.to_string(), "QUESTION 7 is already deleted");

        let unsaved = DomainError::AlreadyDeleted {
            content_type: ContentType::Answer,
            id: None,
        };
        assert_eq!(unsaved.to_string(), "ANSWER (unsaved) is already deleted");
    }

    #[test]
    fn test_is_permission_denied_check() {
        assert!(DomainError::CannotDelete("x".to_string()).is_permission_denied());
        assert!(DomainError::Unauthorized("x".to_string()).is_permission_denied());
        assert!(!DomainError::InvalidTitle("x".to_string()).is_permission_denied());
        assert!(
            !DomainError::AlreadyDeleted {
                content_type: ContentType::Question,
                id: Some(1),
            }
            .is_permission_denied()
        );
    }
}

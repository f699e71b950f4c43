//! User entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Login id reserved for the anonymous guest placeholder
pub const GUEST_USER_ID: &str = "guest";

/// Storage-assigned identity of a [`User`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A board member (Entity)
///
/// Equality and hash cover identity only: the storage id and the login id.
/// Ownership checks compare users this way, so editing a profile never
/// separates a user from the content they wrote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    user_id: String,
    password: String,
    name: String,
    email: Option<String>,
}

impl User {
    pub fn new(
        id: Option<UserId>,
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email,
        }
    }

    /// The anonymous user. Never persisted, never owns anything.
    pub fn guest() -> Self {
        Self::new(None, GUEST_USER_ID, "", GUEST_USER_ID, None)
    }

    pub fn is_guest(&self) -> bool {
        self.id.is_none() && self.user_id == GUEST_USER_ID
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Assign the storage identity. Has no effect once an id is set.
    pub fn assign_id(&mut self, id: UserId) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    /// Login id
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn matches_user_id(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    pub fn matches_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn equals_name_and_email(&self, other: &User) -> bool {
        self.name == other.name && self.email == other.email
    }

    /// Update name and email from `target`.
    ///
    /// `login_user` must be this user, and `target` must carry this user's
    /// current password.
    pub fn update(&mut self, login_user: &User, target: &User) -> Result<(), DomainError> {
        if !self.matches_user_id(&login_user.user_id) {
            return Err(DomainError::Unauthorized(format!(
                "{} cannot modify {}",
                login_user.user_id, self.user_id
            )));
        }

        if !self.matches_password(&target.password) {
            return Err(DomainError::Unauthorized(
                "password does not match".to_string(),
            ));
        }

        self.name = target.name.clone();
        self.email = target.email.clone();
        Ok(())
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.user_id == other.user_id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.user_id.hash(state);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn javajigi() -> User {
        User::new(
            Some(UserId(1)),
            "javajigi",
            "password",
            "name",
            Some("javajigi@slipp.net".to_string()),
        )
    }

    #[test]
    fn test_equality_is_by_identity() {
        assert_eq!(javajigi(), javajigi());

        let other = User::new(Some(UserId(2)), "sanjigi", "password", "name", None);
        assert_ne!(javajigi(), other);

        // Same login id under a different storage id is another user
        let imposter = User::new(Some(UserId(3)), "javajigi", "password", "name", None);
        assert_ne!(javajigi(), imposter);
    }

    #[test]
    fn test_profile_edit_keeps_identity() {
        let before = javajigi();
        let mut after = javajigi();
        let target = User::new(None, "javajigi", "password", "renamed", None);

        after.update(&before, &target).unwrap();

        assert_eq!(after, before);
        assert!(!after.equals_name_and_email(&before));
    }

    #[test]
    fn test_guest_user() {
        let guest = User::guest();
        assert!(guest.is_guest());
        assert!(!javajigi().is_guest());
    }

    #[test]
    fn test_assign_id_only_once() {
        let mut user = User::new(None, "newbie", "pw", "New", None);
        user.assign_id(UserId(10));
        user.assign_id(UserId(11));
        assert_eq!(user.id(), Some(UserId(10)));
    }

    #[test]
    fn test_update_by_owner() {
        let mut user = javajigi();
        let login = javajigi();
        let target = User::new(None, "javajigi", "password", "renamed", None);

        user.update(&login, &target).unwrap();

        assert_eq!(user.name(), "renamed");
        assert!(user.email().is_none());
        assert!(user.equals_name_and_email(&target));
    }

    #[test]
    fn test_update_by_other_user_is_unauthorized() {
        let mut user = javajigi();
        let login = User::new(Some(UserId(2)), "sanjigi", "password", "name", None);
        let target = User::new(None, "javajigi", "password", "renamed", None);

        let err = user.update(&login, &target).unwrap_err();
        assert!(err.is_permission_denied());
        assert_eq!(user.name(), "name");
    }

    #[test]
    fn test_update_with_wrong_password_is_unauthorized() {
        let mut user = javajigi();
        let login = javajigi();
        let target = User::new(None, "javajigi", "wrong", "renamed", None);

        assert!(matches!(
            user.update(&login, &target),
            Err(DomainError::Unauthorized(_))
        ));
    }
}

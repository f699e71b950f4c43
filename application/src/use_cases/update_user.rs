//! Update User use case

use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use crate::use_cases::shared::find_user;
use qna_domain::{DomainError, User};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum UpdateUserError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UpdateUserError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, UpdateUserError::Domain(e) if e.is_permission_denied())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UpdateUserError::Repository(e) if e.is_not_found())
    }
}

/// Input for the [`UpdateUserUseCase`]
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    /// Login id of the profile to change
    pub user_id: String,
    /// Login id of the acting user
    pub login_user: String,
    /// Current password of the profile, as confirmation
    pub password: String,
    pub name: String,
    pub email: Option<String>,
}

/// Use case for changing a user's name and email
pub struct UpdateUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, input: UpdateUserInput) -> Result<User, UpdateUserError> {
        let mut user = find_user(self.users.as_ref(), &input.user_id).await?;
        let login_user = find_user(self.users.as_ref(), &input.login_user).await?;
        let target = User::new(
            None,
            input.user_id,
            input.password,
            input.name,
            input.email,
        );

        user.update(&login_user, &target)?;
        let user = self.users.save(user).await?;

        info!("Updated profile of {}", user.user_id());
        Ok(user)
    }
}

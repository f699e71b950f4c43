//! Register User use case

use crate::ports::audit_logger::{AuditEvent, AuditLogger, NoAuditLogger};
use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use qna_domain::{GUEST_USER_ID, User};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RegisterUserError {
    #[error("User id '{0}' is already taken")]
    DuplicateUserId(String),

    #[error("User id '{0}' is reserved")]
    ReservedUserId(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the [`RegisterUserUseCase`]
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: Option<String>,
}

impl RegisterUserInput {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Use case for registering a new board member
pub struct RegisterUserUseCase {
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditLogger>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            audit: Arc::new(NoAuditLogger),
        }
    }

    pub fn with_audit_logger(mut self, audit: Arc<dyn AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        if input.user_id == GUEST_USER_ID {
            return Err(RegisterUserError::ReservedUserId(input.user_id));
        }
        if self.users.find_by_user_id(&input.user_id).await?.is_some() {
            return Err(RegisterUserError::DuplicateUserId(input.user_id));
        }

        let user = self
            .users
            .save(User::new(
                None,
                input.user_id,
                input.password,
                input.name,
                input.email,
            ))
            .await?;

        info!("Registered user {}", user.user_id());
        self.audit.log(AuditEvent::new(
            "user_registered",
            serde_json::json!({ "user_id": user.user_id() }),
        ));
        Ok(user)
    }
}

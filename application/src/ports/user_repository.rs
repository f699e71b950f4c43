//! User repository port

use super::repository::RepositoryError;
use async_trait::async_trait;
use qna_domain::{User, UserId};

/// Persistence for [`User`]s
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user, assigning an id when it has none
    async fn save(&self, user: User) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Look a user up by login id
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}

//! Helpers shared by several use cases.

use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use qna_domain::User;

/// Resolve a login id to a stored user
pub(crate) async fn find_user(
    users: &dyn UserRepository,
    user_id: &str,
) -> Result<User, RepositoryError> {
    users
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("user", user_id))
}

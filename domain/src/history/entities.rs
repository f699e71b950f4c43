//! Deletion history entity

use super::content_type::ContentType;
use crate::user::entities::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only audit record of a soft delete (Entity)
///
/// `content_id` is `None` when the deleted entity had not been persisted yet.
/// Equality ignores `created_at`, so a record compares equal to the one a
/// test expects regardless of when it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteHistory {
    content_type: ContentType,
    content_id: Option<i64>,
    deleted_by: User,
    created_at: DateTime<Utc>,
}

impl DeleteHistory {
    pub fn new(content_type: ContentType, content_id: Option<i64>, deleted_by: User) -> Self {
        Self::at(content_type, content_id, deleted_by, Utc::now())
    }

    pub fn at(
        content_type: ContentType,
        content_id: Option<i64>,
        deleted_by: User,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content_type,
            content_id,
            deleted_by,
            created_at,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn content_id(&self) -> Option<i64> {
        self.content_id
    }

    pub fn deleted_by(&self) -> &User {
        &self.deleted_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PartialEq for DeleteHistory {
    fn eq(&self, other: &Self) -> bool {
        self.content_type == other.content_type
            && self.content_id == other.content_id
            && self.deleted_by == other.deleted_by
    }
}

impl Eq for DeleteHistory {}

impl std::hash::Hash for DeleteHistory {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.content_type.hash(state);
        self.content_id.hash(state);
        self.deleted_by.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::entities::UserId;
    use chrono::TimeZone;

    #[test]
    fn test_equality_ignores_creation_time() {
        let user = User::new(Some(UserId(1)), "javajigi", "pw", "name", None);
        let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

        let a = DeleteHistory::at(ContentType::Question, Some(1), user.clone(), early);
        let b = DeleteHistory::new(ContentType::Question, Some(1), user.clone());
        assert_eq!(a, b);

        let c = DeleteHistory::new(ContentType::Answer, Some(1), user);
        assert_ne!(a, c);
    }
}

//! Audit timestamps value object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation and last-modification times of a persisted entity (Value Object)
///
/// Owned by the storage lifecycle rather than by business rules, so entities
/// leave it out of their equality and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Stamp a freshly created entity with the current time
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at: None,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Record a modification at the current time
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::now()
    }
}

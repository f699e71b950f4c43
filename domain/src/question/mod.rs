//! Question subdomain.
//!
//! - [`entities::Question`]: the aggregate root, owner-gated soft delete
//! - [`answers::Answers`]: the embedded, ordered answer collection
//! - [`answer::Answer`]: a single answer
//! - [`value_objects`]: identities and title rules

pub mod answer;
pub mod answers;
pub mod entities;
pub mod value_objects;

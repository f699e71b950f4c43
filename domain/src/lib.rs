//! Domain layer for qna-board
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question aggregate
//!
//! A [`Question`] owns its [`Answers`]. Deleting a question is a soft delete
//! gated on ownership: the acting user must have written the question and
//! every live answer under it. A successful delete yields one
//! [`DeleteHistory`] per deleted answer followed by one for the question.
//!
//! ## Soft delete
//!
//! Nothing is physically removed. Deleted entities stay in storage with their
//! `deleted` flag set, and the flag is never cleared.

pub mod config;
pub mod core;
pub mod history;
pub mod question;
pub mod user;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, timestamps::Timestamps};
pub use history::{content_type::ContentType, entities::DeleteHistory};
pub use question::{
    answer::Answer,
    answers::Answers,
    entities::Question,
    value_objects::{AnswerId, MAX_TITLE_LEN, QuestionId},
};
pub use user::entities::{GUEST_USER_ID, User, UserId};

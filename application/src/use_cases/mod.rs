//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod add_answer;
pub mod create_question;
pub mod delete_question;
pub mod list_delete_histories;
pub mod list_questions;
pub mod register_user;
pub mod update_user;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod testing;

//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod audit_logger;
pub mod delete_history_repository;
pub mod question_repository;
pub mod repository;
pub mod user_repository;

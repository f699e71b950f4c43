//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`timestamps::Timestamps`]: storage-owned creation/update times

pub mod error;
pub mod timestamps;

//! User subdomain.
//!
//! - [`entities::User`]: a registered board member (or the guest placeholder)
//! - [`entities::UserId`]: storage-assigned identity

pub mod entities;

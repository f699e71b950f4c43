//! Deletion history subdomain.
//!
//! Every soft delete produces a [`entities::DeleteHistory`] record saying what
//! was deleted ([`content_type::ContentType`] plus id) and by whom.

pub mod content_type;
pub mod entities;

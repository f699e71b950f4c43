//! Storage adapters for the repository ports.
//!
//! Provides [`InMemoryQnaStore`], which implements every repository port and
//! can persist itself to a JSON [`snapshot`] file.

mod memory_store;
pub mod snapshot;

pub use memory_store::InMemoryQnaStore;
pub use snapshot::SnapshotError;

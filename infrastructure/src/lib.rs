//! Infrastructure layer for qna-board
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod persistence;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileStorageConfig,
};
pub use logging::JsonlAuditLogger;
pub use persistence::{InMemoryQnaStore, SnapshotError};

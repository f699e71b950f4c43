//! Configuration file loading for qna-board
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QNA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./qna.toml` or `./.qna.toml`
//! 4. Global: `$XDG_CONFIG_HOME/qna-board/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileStorageConfig,
    LOG_LEVELS,
};
pub use loader::ConfigLoader;

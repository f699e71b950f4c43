//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON snapshot file
    pub path: PathBuf,
    /// Keep everything in memory and ignore `path`
    pub memory_only: bool,
}

impl FileStorageConfig {
    /// The snapshot file to use, if any
    pub fn snapshot_path(&self) -> Option<&Path> {
        if self.memory_only {
            None
        } else {
            Some(&self.path)
        }
    }
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("qna-data.json"),
            memory_only: false,
        }
    }
}

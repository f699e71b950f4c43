//! JSON snapshot of the whole store.
//!
//! The file is rewritten in full after every mutation: serialized to a
//! sibling temp file, then renamed over the original. Processes sharing a
//! snapshot coordinate through an advisory lock on a sibling `.lock` file.

use fs2::FileExt;
use qna_domain::{DeleteHistory, Question, User};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialized form of the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub last_user_id: i64,
    pub last_question_id: i64,
    pub last_answer_id: i64,
    pub users: Vec<User>,
    pub questions: Vec<Question>,
    pub histories: Vec<DeleteHistory>,
}

impl Snapshot {
    /// Read a snapshot. A missing file yields `None`.
    pub async fn load(path: &Path) -> Result<Option<Self>, SnapshotError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| SnapshotError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Replace the file at `path` with this snapshot
    pub async fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let io_err = |source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_vec_pretty(self).map_err(|source| SnapshotError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = temp_path(path);
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
        Ok(())
    }
}

/// Advisory lock guarding one snapshot file, released on drop
#[derive(Debug)]
pub struct SnapshotLock {
    file: File,
}

impl SnapshotLock {
    /// Block until no other holder has the lock
    pub async fn exclusive(path: &Path) -> Result<Self, SnapshotError> {
        Self::acquire(path, true).await
    }

    /// Block until no exclusive holder has the lock
    pub async fn shared(path: &Path) -> Result<Self, SnapshotError> {
        Self::acquire(path, false).await
    }

    async fn acquire(path: &Path, exclusive: bool) -> Result<Self, SnapshotError> {
        let lock_path = sibling(path, ".lock");
        let io_err = |source| SnapshotError::Io {
            path: lock_path.clone(),
            source,
        };

        let target = lock_path.clone();
        let file = tokio::task::spawn_blocking(move || -> std::io::Result<File> {
            if let Some(parent) = target.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .truncate(false)
                .read(true)
                .write(true)
                .open(&target)?;
            if exclusive {
                FileExt::lock_exclusive(&file)?;
            } else {
                FileExt::lock_shared(&file)?;
            }
            Ok(file)
        })
        .await
        .map_err(|e| io_err(std::io::Error::other(e)))?
        .map_err(io_err)?;

        Ok(Self { file })
    }
}

impl Drop for SnapshotLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release snapshot lock: {}", e);
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    sibling(path, ".tmp")
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

//! In-memory store backing every repository port.
//!
//! All state sits behind one `RwLock`, so a write either lands completely or
//! not at all. With a snapshot path configured, every operation takes the
//! snapshot's file lock and reloads the file first, so several processes can
//! share one snapshot without losing each other's writes. Mutations are
//! written back before the lock is released; a failed write rolls the
//! in-memory change back.

use super::snapshot::{Snapshot, SnapshotError, SnapshotLock};
use async_trait::async_trait;
use qna_application::ports::delete_history_repository::DeleteHistoryRepository;
use qna_application::ports::question_repository::{QuestionRepository, check_revision};
use qna_application::ports::repository::RepositoryError;
use qna_application::ports::user_repository::UserRepository;
use qna_domain::{AnswerId, DeleteHistory, Question, QuestionId, User, UserId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default, Clone)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    questions: BTreeMap<QuestionId, Question>,
    histories: Vec<DeleteHistory>,
    last_user_id: i64,
    last_question_id: i64,
    last_answer_id: i64,
}

impl StoreState {
    fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut state = StoreState {
            histories: snapshot.histories,
            last_user_id: snapshot.last_user_id,
            last_question_id: snapshot.last_question_id,
            last_answer_id: snapshot.last_answer_id,
            ..StoreState::default()
        };
        for user in snapshot.users {
            if let Some(id) = user.id() {
                state.users.insert(id, user);
            }
        }
        for question in snapshot.questions {
            if let Some(id) = question.id() {
                state.questions.insert(id, question);
            }
        }
        state
    }

    fn store_question(&mut self, mut question: Question) -> Result<Question, RepositoryError> {
        check_revision(
            question.id().and_then(|id| self.questions.get(&id)),
            &question,
        )?;

        match question.id() {
            Some(id) => self.last_question_id = self.last_question_id.max(id.0),
            None => {
                self.last_question_id += 1;
                question.assign_id(QuestionId(self.last_question_id));
            }
        }

        let highest_answer = question
            .answers()
            .iter()
            .filter_map(|a| a.id())
            .map(|id| id.0)
            .max()
            .unwrap_or_default();
        let mut last_answer_id = self.last_answer_id.max(highest_answer);
        question.assign_answer_ids(|| {
            last_answer_id += 1;
            AnswerId(last_answer_id)
        });
        self.last_answer_id = last_answer_id;
        question.assign_version(question.version() + 1);

        if let Some(id) = question.id() {
            debug!(
                "Storing question {} at revision {} with {} answers",
                id,
                question.version(),
                question.answers().len()
            );
            self.questions.insert(id, question.clone());
        }
        Ok(question)
    }

    fn store_user(&mut self, mut user: User) -> Result<User, RepositoryError> {
        if let Some(existing) = self
            .users
            .values()
            .find(|u| u.matches_user_id(user.user_id()) && u.id() != user.id())
        {
            return Err(RepositoryError::Conflict(format!(
                "user id '{}' belongs to user {}",
                existing.user_id(),
                existing.id().map(|id| id.0).unwrap_or_default()
            )));
        }

        match user.id() {
            Some(id) => self.last_user_id = self.last_user_id.max(id.0),
            None => {
                self.last_user_id += 1;
                user.assign_id(UserId(self.last_user_id));
            }
        }
        if let Some(id) = user.id() {
            self.users.insert(id, user.clone());
        }
        Ok(user)
    }

    fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            last_user_id: self.last_user_id,
            last_question_id: self.last_question_id,
            last_answer_id: self.last_answer_id,
            users: self.users.values().cloned().collect(),
            questions: self.questions.values().cloned().collect(),
            histories: self.histories.clone(),
        }
    }
}

/// Repository adapter keeping users, questions and deletion history in memory
pub struct InMemoryQnaStore {
    state: RwLock<StoreState>,
    snapshot_path: Option<PathBuf>,
}

impl InMemoryQnaStore {
    /// A purely in-memory store; nothing survives the process
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            snapshot_path: None,
        }
    }

    /// A store persisted to the JSON snapshot at `path`, loading it if present
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        let state = {
            let _lock = SnapshotLock::shared(&path).await?;
            load_state(&path).await?
        };
        info!("Opened store snapshot {}", path.display());

        Ok(Self {
            state: RwLock::new(state),
            snapshot_path: Some(path),
        })
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Run `view` against the current state, reloading the snapshot first
    async fn read<T>(&self, view: impl FnOnce(&StoreState) -> T) -> Result<T, RepositoryError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(view(&*self.state.read().await));
        };

        let mut state = self.state.write().await;
        let _lock = SnapshotLock::shared(path).await.map_err(storage)?;
        *state = load_state(path).await.map_err(storage)?;
        Ok(view(&state))
    }

    /// Apply `mutate` to the current state and persist the result.
    ///
    /// With a snapshot, the file stays exclusively locked from the reload
    /// until the new snapshot is in place. On any error the state is left as
    /// it was before `mutate` ran.
    async fn write<T>(
        &self,
        mutate: impl FnOnce(&mut StoreState) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut state = self.state.write().await;
        let lock = match &self.snapshot_path {
            Some(path) => {
                let lock = SnapshotLock::exclusive(path).await.map_err(storage)?;
                *state = load_state(path).await.map_err(storage)?;
                Some(lock)
            }
            None => None,
        };

        let previous = (*state).clone();
        let outcome = match mutate(&mut state) {
            Ok(outcome) => outcome,
            Err(e) => {
                *state = previous;
                return Err(e);
            }
        };

        if let Some(path) = &self.snapshot_path
            && let Err(e) = state.to_snapshot().save(path).await
        {
            *state = previous;
            return Err(storage(e));
        }
        drop(lock);
        Ok(outcome)
    }
}

impl Default for InMemoryQnaStore {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_state(path: &Path) -> Result<StoreState, SnapshotError> {
    Ok(match Snapshot::load(path).await? {
        Some(snapshot) => StoreState::from_snapshot(snapshot),
        None => {
            debug!("No snapshot at {}, starting empty", path.display());
            StoreState::default()
        }
    })
}

fn storage(e: SnapshotError) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl UserRepository for InMemoryQnaStore {
    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        self.write(|state| state.store_user(user)).await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        self.read(|state| state.users.get(&id).cloned()).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        self.read(|state| {
            state
                .users
                .values()
                .find(|u| u.matches_user_id(user_id))
                .cloned()
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.read(|state| state.users.values().cloned().collect()).await
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQnaStore {
    async fn save(&self, question: Question) -> Result<Question, RepositoryError> {
        self.write(|state| state.store_question(question)).await
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        self.read(|state| state.questions.get(&id).cloned()).await
    }

    async fn find_by_deleted_false(&self) -> Result<Vec<Question>, RepositoryError> {
        self.read(|state| {
            state
                .questions
                .values()
                .filter(|q| !q.is_deleted())
                .cloned()
                .collect()
        })
        .await
    }
}

#[async_trait]
impl DeleteHistoryRepository for InMemoryQnaStore {
    async fn save_all(&self, histories: &[DeleteHistory]) -> Result<(), RepositoryError> {
        if histories.is_empty() {
            return Ok(());
        }

        self.write(|state| {
            state.histories.extend_from_slice(histories);
            Ok(())
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<DeleteHistory>, RepositoryError> {
        self.read(|state| state.histories.clone()).await
    }
}

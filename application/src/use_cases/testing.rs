//! In-process fakes for use case tests.

use crate::ports::audit_logger::{AuditEvent, AuditLogger};
use crate::ports::delete_history_repository::DeleteHistoryRepository;
use crate::ports::question_repository::{QuestionRepository, check_revision};
use crate::ports::repository::RepositoryError;
use crate::ports::user_repository::UserRepository;
use async_trait::async_trait;
use qna_domain::{AnswerId, DeleteHistory, Question, QuestionId, User, UserId};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, User>,
    questions: BTreeMap<QuestionId, Question>,
    histories: Vec<DeleteHistory>,
    next_id: i64,
}

impl State {
    fn next(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl State {
    fn store_question(&mut self, mut question: Question) -> Result<Question, RepositoryError> {
        check_revision(
            question.id().and_then(|id| self.questions.get(&id)),
            &question,
        )?;
        if question.id().is_none() {
            let id = self.next();
            question.assign_id(QuestionId(id));
        }
        question.assign_answer_ids(|| AnswerId(self.next()));
        question.assign_version(question.version() + 1);
        if let Some(id) = question.id() {
            self.questions.insert(id, question.clone());
        }
        Ok(question)
    }
}

/// Single fake backing every repository port
#[derive(Default)]
pub(crate) struct FakeStore {
    state: Mutex<State>,
    fail_history_writes: AtomicBool,
    /// Question writes still allowed before they start failing
    question_write_budget: Mutex<Option<usize>>,
    /// Written just before the next question save, as a competing writer would
    interleaved: Mutex<Option<Question>>,
}

impl FakeStore {
    pub(crate) fn fail_history_writes(&self) {
        self.fail_history_writes.store(true, Ordering::SeqCst);
    }

    /// Let `allowed` more question saves through, then fail the rest
    pub(crate) fn fail_question_writes_after(&self, allowed: usize) {
        *self.question_write_budget.lock().unwrap() = Some(allowed);
    }

    /// Commit `question` right before the next question save
    pub(crate) fn interleave_question_write(&self, question: Question) {
        *self.interleaved.lock().unwrap() = Some(question);
    }

    pub(crate) async fn add_user(&self, user_id: &str) -> User {
        UserRepository::save(self, User::new(None, user_id, "password", user_id, None))
            .await
            .unwrap()
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn save(&self, mut user: User) -> Result<User, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if user.id().is_none() {
            let id = state.next();
            user.assign_id(UserId(id));
        }
        let id = user.id().unwrap();
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .values()
            .find(|u| u.matches_user_id(user_id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.state.lock().unwrap().users.values().cloned().collect())
    }
}

#[async_trait]
impl QuestionRepository for FakeStore {
    async fn save(&self, question: Question) -> Result<Question, RepositoryError> {
        if let Some(budget) = self.question_write_budget.lock().unwrap().as_mut() {
            if *budget == 0 {
                return Err(RepositoryError::Storage("question table offline".to_string()));
            }
            *budget -= 1;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(other) = self.interleaved.lock().unwrap().take() {
            state.store_question(other)?;
        }
        state.store_question(question)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.state.lock().unwrap().questions.get(&id).cloned())
    }

    async fn find_by_deleted_false(&self) -> Result<Vec<Question>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .questions
            .values()
            .filter(|q| !q.is_deleted())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DeleteHistoryRepository for FakeStore {
    async fn save_all(&self, histories: &[DeleteHistory]) -> Result<(), RepositoryError> {
        if self.fail_history_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage("history table offline".to_string()));
        }
        self.state
            .lock()
            .unwrap()
            .histories
            .extend_from_slice(histories);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<DeleteHistory>, RepositoryError> {
        Ok(self.state.lock().unwrap().histories.clone())
    }
}

/// Audit logger that keeps event types in memory
#[derive(Default)]
pub(crate) struct RecordingAuditLogger {
    pub(crate) events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingAuditLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl AuditLogger for RecordingAuditLogger {
    fn log(&self, event: AuditEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

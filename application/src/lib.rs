//! Application layer for qna-board
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    audit_logger::{AuditEvent, AuditLogger, NoAuditLogger},
    delete_history_repository::DeleteHistoryRepository,
    question_repository::QuestionRepository,
    repository::RepositoryError,
    user_repository::UserRepository,
};
pub use use_cases::add_answer::{AddAnswerError, AddAnswerInput, AddAnswerUseCase};
pub use use_cases::create_question::{
    CreateQuestionError, CreateQuestionInput, CreateQuestionUseCase,
};
pub use use_cases::delete_question::{
    DeleteQuestionError, DeleteQuestionInput, DeleteQuestionOutput, DeleteQuestionUseCase,
};
pub use use_cases::list_delete_histories::ListDeleteHistoriesUseCase;
pub use use_cases::list_questions::ListQuestionsUseCase;
pub use use_cases::register_user::{RegisterUserError, RegisterUserInput, RegisterUserUseCase};
pub use use_cases::update_user::{UpdateUserError, UpdateUserInput, UpdateUserUseCase};

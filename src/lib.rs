//! # Quizstore - Multiple-choice question store
//!
//! Quizstore provides:
//! - Question and Choice records linked by an explicit foreign key
//! - SQLite-backed storage with one session per unit of work
//! - Transactional creation of a question together with its choices
//! - An HTTP API and CLI over the store

pub mod question;
pub mod storage;
pub mod server;
pub mod config;
pub mod output;
pub mod ui;


// Re-exports for convenient access
pub use question::{Choice, NewChoice, NewQuestion, Question, QuestionWithChoices};
pub use storage::{Database, Session};

/// Result type alias for Quizstore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Quizstore operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database not found: {}", .0.display())]
    DatabaseNotFound(std::path::PathBuf),

    #[error("Question not found: {0}")]
    QuestionNotFound(i64),

    #[error("Background task failed: {0}")]
    Task(String),
}

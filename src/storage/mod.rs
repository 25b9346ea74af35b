//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - question(id, question_text)
//! - choices(id, choice_text, is_correct, question_id)
//!
//! A [`Database`] is the storage client passed into request handlers. It opens
//! one [`Session`] (one connection) per unit of work.

pub mod schema;
pub mod sqlite;

pub use sqlite::{Database, DbStats, Session};

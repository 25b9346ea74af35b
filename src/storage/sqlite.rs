//! SQLite storage implementation

use std::path::{Path, PathBuf};
use std::time::Duration;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use crate::{Result, Error};
use crate::question::{Choice, NewChoice, NewQuestion, Question, QuestionWithChoices};
use super::schema;

/// How long a session waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Storage client: knows where the database lives and opens sessions on it.
///
/// Cloning is cheap; every clone points at the same file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Open a database file (creates it and its schema if missing)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let session = Session::open(&path)?;
        session.initialize_schema()?;
        tracing::debug!("Schema ready in {}", path.display());

        Ok(Self { path })
    }

    /// Open a database that must already exist. Nothing is created on disk.
    pub fn open_existing(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::DatabaseNotFound(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new session. The connection is closed when the session is dropped.
    pub fn session(&self) -> Result<Session> {
        Session::open(&self.path)
    }

    /// Run `f` against a fresh session on the blocking thread pool.
    ///
    /// The session lives only for the duration of `f`, whatever its outcome.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Session) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut session = db.session()?;
            f(&mut session)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))?
    }
}

/// One connection to the store, scoped to a single unit of work
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Open a session on an existing database file
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        tracing::debug!("Opened session on {}", path.display());
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        let session = Self { conn };
        session.initialize_schema()?;
        Ok(session)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Question Operations ==========

    /// Persist a question and all of its choices in one transaction.
    ///
    /// Either every row is written or none is.
    pub fn create_question(&mut self, new: &NewQuestion) -> Result<QuestionWithChoices> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let question = insert_question(&tx, &new.question_text)?;
        let choices = new
            .choices
            .iter()
            .map(|choice| insert_choice(&tx, question.id, choice))
            .collect::<Result<Vec<_>>>()?;

        tx.commit()?;
        Ok(QuestionWithChoices { question, choices })
    }

    /// Get a question and its choices by id
    pub fn get_question(&self, id: i64) -> Result<Option<QuestionWithChoices>> {
        let question = self
            .conn
            .query_row(
                "SELECT id, question_text FROM question WHERE id = ?1",
                [id],
                |row| {
                    Ok(Question {
                        id: row.get(0)?,
                        question_text: row.get(1)?,
                    })
                },
            )
            .optional()?;

        match question {
            Some(question) => {
                let choices = self.choices_for(question.id)?;
                Ok(Some(QuestionWithChoices { question, choices }))
            }
            None => Ok(None),
        }
    }

    /// Get a question by id, treating absence as an error
    pub fn require_question(&self, id: i64) -> Result<QuestionWithChoices> {
        self.get_question(id)?.ok_or(Error::QuestionNotFound(id))
    }

    /// Count all questions
    pub fn count_questions(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM question", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Choice Operations ==========

    /// All choices of a question, in insertion order
    pub fn choices_for(&self, question_id: i64) -> Result<Vec<Choice>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, choice_text, is_correct, question_id FROM choices WHERE question_id = ?1 ORDER BY id"
        )?;

        let choices = stmt
            .query_map([question_id], row_to_choice)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(choices)
    }

    /// Count all choices
    pub fn count_choices(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM choices", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            questions: self.count_questions()?,
            choices: self.count_choices()?,
        })
    }
}

fn insert_question(conn: &Connection, question_text: &str) -> Result<Question> {
    conn.execute(
        "INSERT INTO question (question_text) VALUES (?1)",
        [question_text],
    )?;
    Ok(Question {
        id: conn.last_insert_rowid(),
        question_text: question_text.to_string(),
    })
}

fn insert_choice(conn: &Connection, question_id: i64, choice: &NewChoice) -> Result<Choice> {
    conn.execute(
        "INSERT INTO choices (choice_text, is_correct, question_id) VALUES (?1, ?2, ?3)",
        params![choice.choice_text, choice.is_correct, question_id],
    )?;
    Ok(Choice {
        id: conn.last_insert_rowid(),
        choice_text: choice.choice_text.clone(),
        is_correct: choice.is_correct,
        question_id,
    })
}

fn row_to_choice(row: &rusqlite::Row) -> rusqlite::Result<Choice> {
    Ok(Choice {
        id: row.get(0)?,
        choice_text: row.get(1)?,
        is_correct: row.get(2)?,
        question_id: row.get(3)?,
    })
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DbStats {
    pub questions: usize,
    pub choices: usize,
}

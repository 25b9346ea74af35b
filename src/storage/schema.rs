//! Database schema definitions

/// Per-connection settings. Foreign keys are off by default in SQLite.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// SQL to create the question table
pub const CREATE_QUESTION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS question (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL
)
"#;

/// SQL to create the choices table
/// Each row belongs to exactly one question; deleting a question does not cascade.
pub const CREATE_CHOICES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS choices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    choice_text TEXT NOT NULL,
    is_correct INTEGER NOT NULL DEFAULT 0,
    question_id INTEGER NOT NULL REFERENCES question(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_question_text ON question(question_text)",
    "CREATE INDEX IF NOT EXISTS idx_choices_text ON choices(choice_text)",
    "CREATE INDEX IF NOT EXISTS idx_choices_question ON choices(question_id)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_QUESTION_TABLE, CREATE_CHOICES_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_precede_indexes() {
        let stmts = all_schema_statements();
        assert_eq!(stmts.len(), 2 + CREATE_INDEXES.len());
        assert!(stmts[0].contains("CREATE TABLE IF NOT EXISTS question"));
        assert!(stmts[1].contains("CREATE TABLE IF NOT EXISTS choices"));
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        for _ in 0..2 {
            for stmt in all_schema_statements() {
                conn.execute(stmt, []).unwrap();
            }
        }
    }
}

use std::fmt::Write;

/// Options for opening a SQLite session.
///
/// The plain `SqliteConnection::open(path)` constructor is equivalent to
/// `open_with(SqliteOptions::new(path))`; the fluent setters add the pragmas
/// applied right after the database is opened.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    db_path: String,
    journal_mode: Option<String>,
    busy_timeout_ms: Option<u32>,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            journal_mode: None,
            busy_timeout_ms: None,
        }
    }

    /// Set `PRAGMA journal_mode` (e.g. `WAL`) at open time.
    #[must_use]
    pub fn journal_mode(mut self, mode: impl Into<String>) -> Self {
        self.journal_mode = Some(mode.into());
        self
    }

    /// Set `PRAGMA busy_timeout` in milliseconds at open time.
    #[must_use]
    pub fn busy_timeout_ms(mut self, ms: u32) -> Self {
        self.busy_timeout_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// The pragma script to run after opening, if any setter was used.
    pub(crate) fn pragma_sql(&self) -> Option<String> {
        if self.journal_mode.is_none() && self.busy_timeout_ms.is_none() {
            return None;
        }
        let mut sql = String::new();
        if let Some(mode) = &self.journal_mode {
            let _ = writeln!(sql, "PRAGMA journal_mode = {mode};");
        }
        if let Some(ms) = self.busy_timeout_ms {
            let _ = writeln!(sql, "PRAGMA busy_timeout = {ms};");
        }
        Some(sql)
    }
}

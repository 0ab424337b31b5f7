use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{RecipeError, Result};

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOutcome {
    pub affected_rows: usize,
    /// Row id assigned by an INSERT; `None` for other statements
    pub inserted_id: Option<i64>,
}

/// File-backed SQLite store shared by the whole process.
///
/// Holds a single long-lived connection behind an async mutex. Every primitive
/// suspends the caller until the connection is free, so statements are applied
/// in the order they were submitted. Cloning is cheap and shares the same
/// connection.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Store {
    /// Open or create the database file, creating its parent directories
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RecipeError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let conn = Connection::open(path)?;
        info!("Opened database at {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run one or more statements without parameters (schema DDL)
    pub async fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(sql)?;
        Ok(())
    }

    /// Run a mutating statement
    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteOutcome> {
        let conn = self.conn.lock().await;
        debug!(sql = sql.trim(), "execute");

        let affected_rows = conn.execute(sql, params_from_iter(params))?;
        let inserted_id = if is_insert(sql) && affected_rows > 0 {
            Some(conn.last_insert_rowid())
        } else {
            None
        };

        Ok(ExecuteOutcome {
            affected_rows,
            inserted_id,
        })
    }

    /// Run a statement expected to return at most one row.
    /// No matching row is `Ok(None)`, not an error.
    pub async fn query_one<T, F>(&self, sql: &str, params: Vec<Value>, map: F) -> Result<Option<T>>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().await;
        debug!(sql = sql.trim(), "query_one");

        let row = conn
            .query_row(sql, params_from_iter(params), map)
            .optional()?;
        Ok(row)
    }

    /// Run a statement and collect every row, in the statement's own order
    pub async fn query_many<T, F>(&self, sql: &str, params: Vec<Value>, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().await;
        debug!(sql = sql.trim(), "query_many");

        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(params), map)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .map(|head| head.eq_ignore_ascii_case("insert"))
        .unwrap_or(false)
}

impl From<rusqlite::Error> for RecipeError {
    fn from(e: rusqlite::Error) -> Self {
        RecipeError::Storage(format!("SQLite error: {}", e))
    }
}

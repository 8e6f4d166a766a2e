use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use crate::state::{map_sqlite_error, open_connection};
use crate::{ClientError, ClientResult};

const COMPLETED_VALUE: &str = "true";

/// Local completion-flag store. Reads are authoritative; a present row
/// with value `true` means completed, an absent row means not. No
/// `false` is ever stored.
#[derive(Debug)]
pub struct CompletionStore {
    connection: Connection,
    db_path: PathBuf,
}

impl CompletionStore {
    pub fn open(db_path: &Path) -> ClientResult<Self> {
        let connection = open_connection(db_path)?;
        Ok(Self {
            connection,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn status(&self, key: &str) -> ClientResult<bool> {
        let value = self
            .connection
            .query_row(
                "SELECT value FROM completion_flags WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|error| self.map_error(&error))?;
        Ok(value.as_deref() == Some(COMPLETED_VALUE))
    }

    /// Synchronous local write. Setting `true` upserts the literal
    /// `true` value; setting `false` deletes the row so absence stays
    /// the canonical not-completed state. Idempotent either way.
    pub fn set(&self, key: &str, completed: bool) -> ClientResult<()> {
        if completed {
            self.connection
                .execute(
                    "INSERT INTO completion_flags (key, value, updated_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                    params![key, COMPLETED_VALUE, Utc::now().to_rfc3339()],
                )
                .map_err(|error| self.map_error(&error))?;
        } else {
            self.connection
                .execute("DELETE FROM completion_flags WHERE key = ?1", params![key])
                .map_err(|error| self.map_error(&error))?;
        }
        Ok(())
    }

    pub fn toggle(&self, key: &str) -> ClientResult<bool> {
        let next = !self.status(key)?;
        self.set(key, next)?;
        Ok(next)
    }

    pub fn list(&self) -> ClientResult<Vec<(String, String)>> {
        let mut statement = self
            .connection
            .prepare("SELECT key, updated_at FROM completion_flags ORDER BY updated_at DESC, key")
            .map_err(|error| self.map_error(&error))?;
        let rows = statement
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|error| self.map_error(&error))?
            .collect::<Result<Vec<(String, String)>, rusqlite::Error>>()
            .map_err(|error| self.map_error(&error))?;
        Ok(rows)
    }

    fn map_error(&self, error: &rusqlite::Error) -> ClientError {
        map_sqlite_error(&self.db_path, error)
    }
}

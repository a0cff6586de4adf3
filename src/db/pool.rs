//! SQLite connection wrapper (one exclusively owned handle per invocation).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        tracing::debug!(path, "opening database");
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    /// Fresh, migrated in-memory database. Used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> AppResult<Self> {
        run_pending_migrations(&mut conn)?;
        Ok(Self { conn })
    }
}

//! Versioned schema migrations.
//!
//! The applied version lives in `PRAGMA user_version`; every step runs in
//! its own transaction and bumps the version on success.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

struct Migration {
    version: i64,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create working_days table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS working_days (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            day         TEXT    NOT NULL UNIQUE,
            break_in_m  INTEGER NOT NULL DEFAULT 0,
            start       TEXT    NOT NULL,
            "end"       TEXT    NOT NULL,
            note        TEXT    NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: 2,
        description: "index working_days on start",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_working_days_start ON working_days(start);
        "#,
    },
];

/// Latest schema version known to this binary.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Apply every migration newer than the stored schema version.
pub fn run_pending_migrations(conn: &mut Connection) -> AppResult<()> {
    let current = current_version(conn)?;

    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than supported version {}",
            current,
            latest_version()
        )));
    }

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.transaction()?;
        tx.execute_batch(m.sql).map_err(|e| {
            AppError::Migration(format!("v{} ({}): {}", m.version, m.description, e))
        })?;
        // PRAGMA does not accept bound parameters.
        tx.execute_batch(&format!("PRAGMA user_version = {};", m.version))?;
        tx.commit()?;

        tracing::info!(version = m.version, "applied migration: {}", m.description);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_reaches_latest_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), latest_version());

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='working_days'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn migrations_are_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&mut conn).unwrap();
        run_pending_migrations(&mut conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn newer_schema_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();

        let err = run_pending_migrations(&mut conn).unwrap_err();
        assert!(matches!(err, AppError::Migration(_)));
    }
}

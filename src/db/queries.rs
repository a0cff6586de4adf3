use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::working_day::{DAY_FORMAT, TIMESTAMP_FORMAT};
use crate::models::WorkingDay;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{ErrorCode, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = r#"SELECT id, day, break_in_m, start, "end", note FROM working_days"#;

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_timestamp(idx: usize, s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(s.to_string())))
}

pub fn map_row(row: &Row) -> Result<WorkingDay> {
    let day_str: String = row.get("day")?;
    let start_str: String = row.get("start")?;
    let end_str: String = row.get("end")?;

    let day = NaiveDate::parse_from_str(&day_str, DAY_FORMAT)
        .map_err(|_| conversion_error(1, AppError::InvalidDate(day_str.clone())))?;

    Ok(WorkingDay {
        id: row.get("id")?,
        day,
        start: parse_timestamp(3, &start_str)?,
        end: parse_timestamp(4, &end_str)?,
        break_minutes: row.get("break_in_m")?,
        note: row.get("note")?,
    })
}

/// Exact lookup by calendar date.
pub fn load_by_date(pool: &DbPool, date: &NaiveDate) -> AppResult<Option<WorkingDay>> {
    let sql = format!("{} WHERE day = ?1", SELECT_COLUMNS);
    let day = pool
        .conn
        .query_row(&sql, [date.format(DAY_FORMAT).to_string()], map_row)
        .optional()?;
    Ok(day)
}

/// Insert a new day and return its id.
pub fn insert_day(pool: &DbPool, wd: &WorkingDay) -> AppResult<i64> {
    if load_by_date(pool, &wd.day)?.is_some() {
        return Err(AppError::DuplicateDate(wd.day_str()));
    }

    pool.conn
        .execute(
            r#"INSERT INTO working_days (day, break_in_m, start, "end", note)
               VALUES (?1, ?2, ?3, ?4, ?5)"#,
            params![
                wd.day_str(),
                wd.break_minutes,
                wd.start_str(),
                wd.end_str(),
                wd.note
            ],
        )
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => AppError::DuplicateDate(wd.day_str()),
            _ => AppError::Db(e),
        })?;

    let id = pool.conn.last_insert_rowid();
    tracing::debug!(id, day = %wd.day, "inserted working day");
    Ok(id)
}

/// Update every field of an existing day, matched by id.
pub fn update_day(pool: &DbPool, wd: &WorkingDay) -> AppResult<()> {
    let changed = pool.conn.execute(
        r#"UPDATE working_days
           SET day = ?1, break_in_m = ?2, start = ?3, "end" = ?4, note = ?5
           WHERE id = ?6"#,
        params![
            wd.day_str(),
            wd.break_minutes,
            wd.start_str(),
            wd.end_str(),
            wd.note,
            wd.id
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(wd.day_str()));
    }

    tracing::debug!(id = wd.id, day = %wd.day, "updated working day");
    Ok(())
}

pub fn delete_day(pool: &DbPool, wd: &WorkingDay) -> AppResult<()> {
    let changed = pool.conn.execute(
        "DELETE FROM working_days WHERE id = ?1 AND day = ?2",
        params![wd.id, wd.day_str()],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(wd.day_str()));
    }

    tracing::debug!(id = wd.id, day = %wd.day, "deleted working day");
    Ok(())
}

/// Days whose start lies strictly between `start` and `end`, newest first.
pub fn list_range(
    pool: &DbPool,
    start: &NaiveDateTime,
    end: &NaiveDateTime,
) -> AppResult<Vec<WorkingDay>> {
    let sql = format!(
        "{} WHERE start > ?1 AND start < ?2 ORDER BY start DESC",
        SELECT_COLUMNS
    );
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sum over all days of (worked minutes - `baseline`). Zero without records.
pub fn overtime(pool: &DbPool, baseline: i64) -> AppResult<i64> {
    let total: i64 = pool.conn.query_row(
        r#"SELECT COALESCE(SUM(
               (CAST(strftime('%s', "end") AS INTEGER) - CAST(strftime('%s', start) AS INTEGER)) / 60
               - break_in_m
               - ?1
           ), 0)
           FROM working_days"#,
        [baseline],
        |row| row.get(0),
    )?;
    Ok(total)
}

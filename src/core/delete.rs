use crate::db::pool::DbPool;
use crate::db::queries::{delete_day, load_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::WorkingDay;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the day recorded for `date`, returning what was deleted.
    pub fn apply(pool: &DbPool, date: NaiveDate) -> AppResult<WorkingDay> {
        let wd = load_by_date(pool, &date)?
            .ok_or_else(|| AppError::NotFound(date.format("%Y-%m-%d").to_string()))?;

        delete_day(pool, &wd)?;
        tracing::info!(day = %date, "deleted working day");
        Ok(wd)
    }
}

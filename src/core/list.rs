use crate::db::pool::DbPool;
use crate::db::queries::list_range;
use crate::errors::AppResult;
use crate::models::WorkingDay;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

pub struct ListLogic;

impl ListLogic {
    /// Bounds for listing whole calendar days.
    ///
    /// The lower bound is midnight of `start` (or `today - days_back`), the
    /// upper bound midnight after `end` (or after today), so every entry of
    /// the last day is included.
    pub fn range_for(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
        days_back: i64,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let from = start.unwrap_or_else(|| {
            today
                .checked_sub_days(Days::new(days_back.max(0) as u64))
                .unwrap_or(NaiveDate::MIN)
        });
        let to = end.unwrap_or(today);
        let to_next = to.succ_opt().unwrap_or(NaiveDate::MAX);

        (
            from.and_time(NaiveTime::MIN),
            to_next.and_time(NaiveTime::MIN),
        )
    }

    pub fn apply(
        pool: &DbPool,
        from: &NaiveDateTime,
        to: &NaiveDateTime,
    ) -> AppResult<Vec<WorkingDay>> {
        let days = list_range(pool, from, to)?;
        tracing::debug!(%from, %to, count = days.len(), "listed working days");
        Ok(days)
    }
}

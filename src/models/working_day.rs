use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Format used for `working_days.day` (TEXT "YYYY-MM-DD").
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// Format used for `working_days.start` / `working_days.end`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded day of work. There is at most one per calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDay {
    pub id: i64,              // ⇔ working_days.id (0 until persisted)
    pub day: NaiveDate,       // ⇔ working_days.day (unique)
    pub start: NaiveDateTime, // ⇔ working_days.start
    pub end: NaiveDateTime,   // ⇔ working_days.end
    pub break_minutes: i64,   // ⇔ working_days.break_in_m
    pub note: String,         // ⇔ working_days.note
}

impl WorkingDay {
    pub fn new(
        day: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
        break_minutes: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            day,
            start,
            end,
            break_minutes,
            note: note.into(),
        }
    }

    /// Net minutes worked: (end - start) - break.
    pub fn worked_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes() - self.break_minutes
    }

    /// Minutes above (or below, if negative) the given daily baseline.
    pub fn overtime_minutes(&self, baseline: i64) -> i64 {
        self.worked_minutes() - baseline
    }

    pub fn day_str(&self) -> String {
        self.day.format(DAY_FORMAT).to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for WorkingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Worked from {} to {} taking {} min break (note: {})",
            self.day,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.break_minutes,
            self.note
        )
    }
}

//! Upsert of a working day: merge user input into the stored record.

use crate::db::pool::DbPool;
use crate::db::queries::{insert_day, load_by_date, update_day};
use crate::errors::{AppError, AppResult};
use crate::models::{DayInput, WorkingDay};
use chrono::NaiveDateTime;

/// What has to happen to the store after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Insert(WorkingDay),
    Update(WorkingDay),
    Unchanged(WorkingDay),
}

impl MergeOutcome {
    pub fn day(&self) -> &WorkingDay {
        match self {
            MergeOutcome::Insert(wd) | MergeOutcome::Update(wd) | MergeOutcome::Unchanged(wd) => {
                wd
            }
        }
    }
}

/// Merge `input` into `existing`.
///
/// For an existing day only supplied fields that differ are overwritten.
/// A new day takes start/end from `now` and a zero break when not supplied;
/// the time of day always lands on `input.date`.
pub fn merge_day(
    existing: Option<WorkingDay>,
    input: &DayInput,
    now: NaiveDateTime,
) -> MergeOutcome {
    let Some(mut wd) = existing else {
        let start = input.date.and_time(input.start.unwrap_or(now.time()));
        let end = input.date.and_time(input.end.unwrap_or(now.time()));
        return MergeOutcome::Insert(WorkingDay::new(
            input.date,
            start,
            end,
            input.break_minutes.unwrap_or(0),
            input.note.clone().unwrap_or_default(),
        ));
    };

    let mut changed = false;

    if let Some(t) = input.start {
        let start = wd.day.and_time(t);
        if start != wd.start {
            wd.start = start;
            changed = true;
        }
    }

    if let Some(t) = input.end {
        let end = wd.day.and_time(t);
        if end != wd.end {
            wd.end = end;
            changed = true;
        }
    }

    if let Some(b) = input.break_minutes
        && b != wd.break_minutes
    {
        wd.break_minutes = b;
        changed = true;
    }

    if let Some(note) = &input.note
        && *note != wd.note
    {
        wd.note = note.clone();
        changed = true;
    }

    if changed {
        MergeOutcome::Update(wd)
    } else {
        MergeOutcome::Unchanged(wd)
    }
}

/// High-level business logic for the default (upsert) command.
pub struct TrackLogic;

impl TrackLogic {
    /// Load the day, merge the input and persist it. Returns the stored record.
    pub fn apply(pool: &DbPool, input: &DayInput, now: NaiveDateTime) -> AppResult<WorkingDay> {
        if let Some(b) = input.break_minutes
            && b < 0
        {
            return Err(AppError::InvalidBreak(b));
        }

        let existing = load_by_date(pool, &input.date)?;

        match merge_day(existing, input, now) {
            MergeOutcome::Insert(mut wd) => {
                wd.id = insert_day(pool, &wd)?;
                tracing::info!(day = %wd.day, "created working day");
                Ok(wd)
            }
            MergeOutcome::Update(wd) => {
                update_day(pool, &wd)?;
                tracing::info!(day = %wd.day, "updated working day");
                Ok(wd)
            }
            MergeOutcome::Unchanged(wd) => {
                tracing::debug!(day = %wd.day, "nothing to change");
                Ok(wd)
            }
        }
    }
}

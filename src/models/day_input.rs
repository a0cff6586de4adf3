use chrono::{NaiveDate, NaiveTime};

/// What the user asked to record for one day.
///
/// Every optional field is `None` when the flag was not given at all;
/// `Some` always wins over the stored value, including `Some(String::new())`
/// for the note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInput {
    pub date: NaiveDate,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub break_minutes: Option<i64>,
    pub note: Option<String>,
}

impl DayInput {
    /// Input for `date` with nothing else supplied.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            start: None,
            end: None,
            break_minutes: None,
            note: None,
        }
    }
}

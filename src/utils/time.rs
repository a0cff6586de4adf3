//! Time utilities: parsing HH:MM, daily target durations, truncating "now".

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    input.map(parse_time).transpose()
}

/// Current local time, cut to whole minutes like every other stored timestamp.
pub fn now_minutes() -> NaiveDateTime {
    truncate_to_minute(chrono::Local::now().naive_local())
}

pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Parse a duration such as `8h`, `7h30m` or `450m` into minutes.
pub fn parse_duration_to_minutes(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let mut total = 0i64;
    let mut digits = String::new();
    let mut seen_unit = false;

    for c in s.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'h' | 'm' => {
                let n: i64 = digits.parse().ok()?;
                digits.clear();
                let minutes = if c == 'h' { n.checked_mul(60)? } else { n };
                total = total.checked_add(minutes)?;
                seen_unit = true;
            }
            ' ' => {}
            _ => return None,
        }
    }

    match (digits.is_empty(), seen_unit) {
        (true, true) => Some(total),
        // bare number means minutes
        (false, false) => digits.parse().ok(),
        _ => None,
    }
}

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date; out-of-range days like `2020-08-32` are rejected.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an optional date flag, falling back to `default` when absent.
pub fn parse_date_or(input: Option<&str>, default: NaiveDate) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("2020-06-27").unwrap(),
            NaiveDate::from_ymd_opt(2020, 6, 27).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_dates() {
        for bad in ["2020-08-32", "2020-13-01", "27.06.2020", ""] {
            assert!(
                matches!(parse_date(bad), Err(AppError::InvalidDate(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn default_only_when_absent() {
        let fallback = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(parse_date_or(None, fallback).unwrap(), fallback);
        assert!(parse_date_or(Some("nope"), fallback).is_err());
    }
}

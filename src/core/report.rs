use crate::models::WorkingDay;
use crate::utils::mins2hours;

/// Summary printed after every upsert.
pub fn build_report(today: Option<&WorkingDay>, overtime_minutes: i64) -> String {
    let total = format!("⏰ Total overtime {} hours", mins2hours(overtime_minutes));

    match today {
        Some(wd) => format!(
            "💪 Worked today {} hrs\n{}",
            mins2hours(wd.worked_minutes()),
            total
        ),
        None => total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn report_without_today() {
        assert_eq!(build_report(None, 123), "⏰ Total overtime 2.05 hours");
        assert_eq!(build_report(None, 0), "⏰ Total overtime 0.00 hours");
    }

    #[test]
    fn report_with_today() {
        let d = NaiveDate::from_ymd_opt(2020, 10, 8).unwrap();
        let wd = WorkingDay::new(
            d,
            d.and_hms_opt(7, 50, 0).unwrap(),
            d.and_hms_opt(16, 20, 0).unwrap(),
            30,
            "",
        );

        assert_eq!(
            build_report(Some(&wd), 123),
            "💪 Worked today 8.00 hrs\n⏰ Total overtime 2.05 hours"
        );
    }
}

//! Formatting helpers for CLI output.

pub fn mins2readable(mins: i64, want_sign: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, hours, minutes)
}

/// Minutes as decimal hours with two digits, e.g. 123 → "2.05".
pub fn mins2hours(mins: i64) -> String {
    format!("{:.2}", mins as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(145, true), "+02h 25m");
        assert_eq!(mins2readable(145, false), "02h 25m");
        assert_eq!(mins2readable(-70, false), "-01h 10m");
        assert_eq!(mins2readable(0, true), "00h 00m");
    }

    #[test]
    fn decimal_hours() {
        assert_eq!(mins2hours(123), "2.05");
        assert_eq!(mins2hours(510), "8.50");
        assert_eq!(mins2hours(-30), "-0.50");
        assert_eq!(mins2hours(0), "0.00");
    }
}

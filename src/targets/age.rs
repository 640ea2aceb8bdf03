//! Age derivation from birth date
//!
//! Both dates are plain calendar dates in the process's local time zone; no
//! timezone correction is applied.

use chrono::{Datelike, Local, NaiveDate};

/// Age in whole years at the given date
///
/// The birthday itself counts: a birth date exactly N years before `today`
/// yields N. A future birth date yields a negative value; callers reject
/// non-positive ages during profile validation.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age in whole years as of the local calendar date
pub fn calculate_age(birth: NaiveDate) -> i32 {
    age_on(birth, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_today_counts() {
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 6, 15)), 30);
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 6, 14)), 29);
    }

    #[test]
    fn test_day_after_birthday() {
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 6, 16)), 30);
    }

    #[test]
    fn test_earlier_month_not_yet_birthday() {
        assert_eq!(age_on(date(1995, 6, 15), date(2025, 5, 20)), 29);
    }

    #[test]
    fn test_future_birth_date_goes_negative() {
        assert!(age_on(date(2030, 1, 1), date(2025, 6, 15)) < 0);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(age_on(date(2025, 6, 15), date(2025, 6, 15)), 0);
    }
}

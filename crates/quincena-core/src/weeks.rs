use chrono::{Datelike, NaiveDate};

/// Count weeks in `[start, end]` by Monday boundaries.
///
/// The partial first week counts as one, and every later Monday inside the
/// range starts another. This is not `ceil(days / 7)`: a range starting on
/// Saturday and ending the following Sunday spans nine days but one week.
///
/// Only meaningful for `start < end`; other inputs still run the same
/// arithmetic and may return zero or negative counts.
pub fn count_weeks(start: NaiveDate, end: NaiveDate) -> i64 {
    let total_days = (end - start).num_days() + 1;
    let days_until_monday = (7 - i64::from(start.weekday().num_days_from_monday())) % 7;
    1 + (total_days - days_until_monday - 1).div_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_start_exactly_seven_days() {
        // Sat Mar 1 - Fri Mar 7, 2025
        assert_eq!(count_weeks(date(2025, 3, 1), date(2025, 3, 7)), 1);
    }

    #[test]
    fn saturday_start_through_sunday() {
        // Sat Mar 1 - Sun Mar 9: crosses one Monday but 1 + floor(6 / 7)
        assert_eq!(count_weeks(date(2025, 3, 1), date(2025, 3, 9)), 1);
        // Reaching Mon Mar 10 adds the second week
        assert_eq!(count_weeks(date(2025, 3, 1), date(2025, 3, 10)), 2);
    }

    #[test]
    fn monday_start_one_day_short_of_a_week() {
        // Mon Mar 3 - Sat Mar 8
        assert_eq!(count_weeks(date(2025, 3, 3), date(2025, 3, 8)), 1);
        // Mon Mar 3 - Sun Mar 9
        assert_eq!(count_weeks(date(2025, 3, 3), date(2025, 3, 9)), 1);
    }

    #[test]
    fn monday_to_monday() {
        assert_eq!(count_weeks(date(2025, 3, 3), date(2025, 3, 10)), 2);
    }

    #[test]
    fn sunday_start_spanning_one_monday() {
        // Sun Mar 2 - Mon Mar 3
        assert_eq!(count_weeks(date(2025, 3, 2), date(2025, 3, 3)), 1);
        assert_eq!(count_weeks(date(2025, 3, 2), date(2025, 3, 9)), 1);
        assert_eq!(count_weeks(date(2025, 3, 2), date(2025, 3, 10)), 2);
    }

    #[test]
    fn full_year() {
        assert_eq!(count_weeks(date(2025, 3, 1), date(2026, 2, 28)), 52);
        assert_eq!(count_weeks(date(2025, 3, 3), date(2025, 3, 31)), 5);
    }

    #[test]
    fn equal_dates_are_not_meaningful() {
        // A single-day span is not a valid range; the arithmetic gives zero
        assert_eq!(count_weeks(date(2025, 3, 15), date(2025, 3, 15)), 0);
    }

    #[test]
    fn reversed_range_is_not_meaningful() {
        // Not a valid range; the arithmetic still yields a (negative) number
        assert_eq!(count_weeks(date(2025, 3, 10), date(2025, 3, 1)), -1);
    }
}

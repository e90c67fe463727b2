use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns true for Monday through Friday. Holidays are not considered.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves a weekend date back to the preceding Friday.
/// Saturday shifts one day, Sunday two; weekdays are returned unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    let back = match date.weekday() {
        Weekday::Sat => 1,
        Weekday::Sun => 2,
        _ => return date,
    };
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

//! Semi-monthly payment calendar.
//!
//! Computes the 15th and month-end pay dates inside a date range, moved back
//! to Friday when they fall on a weekend, and counts the weeks the range
//! spans.

pub mod business_day;
pub mod calendar;
pub mod error;
pub mod listing;
pub mod range;
pub mod schedule;
pub mod weeks;

pub use error::QuincenaError;
pub use range::DateRange;
pub use schedule::payment_schedule;
pub use weeks::count_weeks;

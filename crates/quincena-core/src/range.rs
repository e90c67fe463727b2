use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::QuincenaError;
use crate::schedule;
use crate::weeks;

/// A forward date range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, QuincenaError> {
        if start >= end {
            return Err(QuincenaError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, counting both endpoints.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// First day of every month overlapping the range, in order.
    pub fn months(&self) -> MonthStarts {
        months_between(self.start, self.end)
    }

    /// Weekend-adjusted 15th and month-end dates, ascending.
    pub fn payment_schedule(&self) -> Vec<NaiveDate> {
        schedule::payment_schedule(self.start, self.end)
    }

    pub fn week_count(&self) -> i64 {
        weeks::count_weeks(self.start, self.end)
    }
}

/// Iterator over month starts, see [`months_between`].
#[derive(Debug, Clone)]
pub struct MonthStarts {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for MonthStarts {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.checked_add_months(Months::new(1));
        Some(current)
    }
}

/// Iterates day 1 of each month from the month containing `start` through
/// the month containing `end`. Empty when `start > end`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> MonthStarts {
    let first = if start <= end {
        start.with_day(1)
    } else {
        None
    };
    MonthStarts { next: first, end }
}

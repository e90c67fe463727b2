//! Semi-monthly ("quincenal") payment dates.
//!
//! Each month contributes two candidates, the 15th and its last day. A
//! candidate is kept when the unadjusted date lies inside the range and is
//! then moved off the weekend, so an adjusted date may precede `start` by up
//! to two days.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::business_day::adjust_for_weekend;
use crate::range::months_between;

/// The two nominal pay days of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PayDay {
    /// Day 15
    Fifteenth,
    /// Last calendar day (28, 29, 30 or 31)
    MonthEnd,
}

impl PayDay {
    pub const ALL: [PayDay; 2] = [PayDay::Fifteenth, PayDay::MonthEnd];

    /// Unadjusted pay date in the month starting at `first_of_month`.
    pub fn in_month(self, first_of_month: NaiveDate) -> Option<NaiveDate> {
        match self {
            PayDay::Fifteenth => first_of_month.with_day(15),
            PayDay::MonthEnd => last_day_of_month(first_of_month),
        }
    }
}

/// Last calendar day of the month containing `date`.
///
/// Probes day 31 down to 28 within the month itself, so the last
/// representable month still has an end.
pub fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    (28..=31).rev().find_map(|day| date.with_day(day))
}

/// Weekend-adjusted pay dates for `[start, end]`, ascending and unique.
///
/// Returns an empty schedule when `start > end`; validating the range is
/// left to the caller.
pub fn payment_schedule(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let dates: BTreeSet<NaiveDate> = months_between(start, end)
        .flat_map(|month| PayDay::ALL.into_iter().filter_map(move |p| p.in_month(month)))
        .filter(|candidate| start <= *candidate && *candidate <= end)
        .map(adjust_for_weekend)
        .collect();
    dates.into_iter().collect()
}

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::range::DateRange;

/// Column headers for a Sunday-first week.
pub const WEEKDAY_HEADERS: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

/// How a day is shown in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayMark {
    Payment,
    InRange,
    OutOfRange,
}

/// One month laid out in Sunday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    pub days: Vec<(u32, DayMark)>,
}

impl MonthGrid {
    /// Build the grid for the month starting at `first_of_month`.
    /// Payment marks take precedence over range membership.
    pub fn build(
        first_of_month: NaiveDate,
        range: &DateRange,
        payments: &HashSet<NaiveDate>,
    ) -> Self {
        let days = first_of_month
            .iter_days()
            .take_while(|d| d.month() == first_of_month.month())
            .map(|d| {
                let mark = if payments.contains(&d) {
                    DayMark::Payment
                } else if range.contains(d) {
                    DayMark::InRange
                } else {
                    DayMark::OutOfRange
                };
                (d.day(), mark)
            })
            .collect();

        Self {
            year: first_of_month.year(),
            month: first_of_month.month(),
            leading_blanks: first_of_month.weekday().num_days_from_sunday(),
            days,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Rows of seven cells, `None` for padding before day 1 and after the
    /// last day.
    pub fn weeks(&self) -> Vec<[Option<(u32, DayMark)>; 7]> {
        let mut cells: Vec<Option<(u32, DayMark)>> = vec![None; self.leading_blanks as usize];
        cells.extend(self.days.iter().copied().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Grids for every month the range touches.
pub fn month_grids(range: &DateRange, payments: &[NaiveDate]) -> Vec<MonthGrid> {
    let payments: HashSet<NaiveDate> = payments.iter().copied().collect();
    range
        .months()
        .map(|first| MonthGrid::build(first, range, &payments))
        .collect()
}

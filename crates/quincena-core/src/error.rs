use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuincenaError {
    #[error("start date {start} must be before end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

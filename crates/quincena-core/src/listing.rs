//! Numbered payment listing and its CSV export.
//!
//! Labels are Spanish, matching the payroll documents the export feeds.

use std::io::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::QuincenaError;
use crate::range::DateRange;

const CSV_HEADER: [&str; 4] = ["No.", "Fecha", "Día", "Mes"];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One line of the payment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentRow {
    /// 1-based position in the schedule
    pub index: usize,
    pub date: NaiveDate,
    /// `dd/mm/yyyy`
    pub formatted: String,
    pub weekday: &'static str,
    /// Month name and year, e.g. `Marzo 2025`
    pub month: String,
}

impl PaymentRow {
    pub fn new(index: usize, date: NaiveDate) -> Self {
        Self {
            index,
            date,
            formatted: date.format("%d/%m/%Y").to_string(),
            weekday: weekday_name_es(date.weekday()),
            month: format!("{} {}", month_name_es(date.month()), date.year()),
        }
    }
}

/// Number the dates of a schedule from 1.
pub fn payment_rows(dates: &[NaiveDate]) -> Vec<PaymentRow> {
    dates
        .iter()
        .enumerate()
        .map(|(i, d)| PaymentRow::new(i + 1, *d))
        .collect()
}

pub fn weekday_name_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Spanish month name for a 1-based month number. Empty for anything else.
pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "",
    }
}

/// Write rows as CSV with a leading UTF-8 byte-order mark so spreadsheet
/// tools pick up the accented headers.
pub fn write_csv<W: Write>(rows: &[PaymentRow], mut writer: W) -> Result<(), QuincenaError> {
    writer.write_all(UTF8_BOM)?;

    let mut csv = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([
            row.index.to_string().as_str(),
            row.formatted.as_str(),
            row.weekday,
            row.month.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Default export file name, e.g. `fechas_pago_20250301_20260228.csv`.
pub fn export_file_name(range: &DateRange) -> String {
    format!(
        "fechas_pago_{}_{}.csv",
        range.start().format("%Y%m%d"),
        range.end().format("%Y%m%d")
    )
}

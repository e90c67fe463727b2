use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use quincena_core::calendar::{self, DayMark, MonthGrid, WEEKDAY_HEADERS};
use quincena_core::listing::{self, PaymentRow};
use quincena_core::DateRange;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "quincena",
    about = "Semi-monthly payment dates and week counts for a date range"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// End date (YYYY-MM-DD), must be after the start date
    #[arg(long)]
    end: NaiveDate,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week count and number of payments
    Summary {
        #[command(flatten)]
        range: RangeArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List payment dates
    Schedule {
        #[command(flatten)]
        range: RangeArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print month calendars with payment days highlighted
    Calendar {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Export payment dates as CSV
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Output file, `-` for stdout (default: fechas_pago_<start>_<end>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct Summary {
    start: NaiveDate,
    end: NaiveDate,
    weeks: i64,
    payments: usize,
}

impl RangeArgs {
    fn validate(self) -> Result<DateRange> {
        Ok(DateRange::new(self.start, self.end)?)
    }
}

fn summarize(range: &DateRange) -> Summary {
    Summary {
        start: range.start(),
        end: range.end(),
        weeks: range.week_count(),
        payments: range.payment_schedule().len(),
    }
}

fn cmd_summary(range: &DateRange, format: OutputFormat) -> Result<()> {
    let summary = summarize(range);
    match format {
        OutputFormat::Table => {
            println!("{} to {}", summary.start, summary.end);
            println!("Weeks:    {}", summary.weeks);
            println!("Payments: {}", summary.payments);
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render_table(rows: &[PaymentRow]) -> String {
    let mut out = format!("{:<5}{:<12}{:<11}{}\n", "No.", "Fecha", "Día", "Mes");
    for row in rows {
        out.push_str(&format!(
            "{:<5}{:<12}{:<11}{}\n",
            row.index, row.formatted, row.weekday, row.month
        ));
    }
    out
}

fn cmd_schedule(range: &DateRange, format: OutputFormat) -> Result<()> {
    let dates = range.payment_schedule();
    debug!(
        "{} payment date(s) between {} and {}",
        dates.len(),
        range.start(),
        range.end()
    );
    let rows = listing::payment_rows(&dates);

    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No payment dates in range.");
            } else {
                print!("{}", render_table(&rows));
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rows).context("failed to serialize payment rows")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render_cell(cell: Option<(u32, DayMark)>) -> String {
    match cell {
        None => "    ".to_string(),
        Some((day, DayMark::Payment)) => format!("[{day:>2}]"),
        Some((day, DayMark::InRange)) => format!(" {day:>2} "),
        Some((day, DayMark::OutOfRange)) => format!("({day:>2})"),
    }
}

fn render_month(grid: &MonthGrid) -> String {
    let mut out = format!("{} {}\n", listing::month_name_es(grid.month), grid.year);
    let header: String = WEEKDAY_HEADERS.iter().map(|h| format!(" {h:>2} ")).collect();
    out.push_str(header.trim_end());
    out.push('\n');
    for week in grid.weeks() {
        let line: String = week.into_iter().map(render_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn cmd_calendar(range: &DateRange) -> Result<()> {
    let dates = range.payment_schedule();
    let grids = calendar::month_grids(range, &dates);
    info!("{} month(s), {} payment date(s)", grids.len(), dates.len());

    let rendered: Vec<String> = grids.iter().map(render_month).collect();
    println!("{}", rendered.join("\n"));
    println!("[dd] payment day   dd in range   (dd) out of range");
    Ok(())
}

fn export_to(range: &DateRange, writer: impl Write) -> Result<usize> {
    let rows = listing::payment_rows(&range.payment_schedule());
    listing::write_csv(&rows, writer).context("failed to write CSV")?;
    Ok(rows.len())
}

fn cmd_export(range: &DateRange, output: Option<&Path>) -> Result<()> {
    let path = match output {
        Some(p) if p == Path::new("-") => {
            export_to(range, io::stdout().lock())?;
            return Ok(());
        }
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(listing::export_file_name(range)),
    };

    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let count = export_to(range, BufWriter::new(file))?;
    info!("wrote {count} payment date(s) to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        Commands::Summary { range, format } => {
            cmd_summary(&range.validate()?, *format)?;
        }
        Commands::Schedule { range, format } => {
            cmd_schedule(&range.validate()?, *format)?;
        }
        Commands::Calendar { range } => {
            cmd_calendar(&range.validate()?)?;
        }
        Commands::Export { range, output } => {
            cmd_export(&range.validate()?, output.as_deref())?;
        }
    }

    Ok(())
}

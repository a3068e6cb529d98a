//! CSV export of normalized flight records.
//!
//! Fields are written as-is with no quoting or escaping. A value containing
//! a comma or a newline produces a file that will not parse back into the
//! same columns; that is a known limitation of the format.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::CoreError;
use crate::flight::FlightRecord;

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 5] = [
    "Flight ID",
    "Origin Airport",
    "Destination Airport",
    "Airline",
    "Delay (Minutes)",
];

pub const CSV_EXTENSION: &str = ".csv";

/// Trim a user-supplied file name and append `.csv` when it is missing.
pub fn ensure_csv_extension(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(CSV_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{CSV_EXTENSION}")
    }
}

/// Serialize records (header first) into any writer.
pub fn write_csv<W: Write>(records: &[FlightRecord], out: W) -> Result<W, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.origin.clone(),
            record.destination.clone(),
            record.airline.clone(),
            record.delay.to_string(),
        ])?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write records to `path`, replacing any existing file.
pub fn export_csv(records: &[FlightRecord], path: &Path) -> Result<(), CoreError> {
    let file = std::fs::File::create(path).map_err(|e| export_failure(path, e))?;
    write_csv(records, file).map_err(|e| export_failure(path, e))?;
    Ok(())
}

/// Read an exported file back into records.
pub fn read_csv(path: &Path) -> Result<Vec<FlightRecord>, CoreError> {
    let file = std::fs::File::open(path).map_err(|e| export_failure(path, e))?;
    parse_csv(file, path)
}

/// Parse exported CSV text. `origin` labels errors.
pub fn parse_csv<R: Read>(input: R, origin: &Path) -> Result<Vec<FlightRecord>, CoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .from_reader(input);

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| export_failure(origin, e))?;
        if row.len() != CSV_HEADER.len() {
            return Err(export_failure(
                origin,
                format!(
                    "line {} has {} columns, expected {}",
                    line + 2,
                    row.len(),
                    CSV_HEADER.len()
                ),
            ));
        }
        let number = |i: usize| {
            row[i].parse::<i64>().map_err(|e| {
                export_failure(origin, format!("line {} {}: {e}", line + 2, CSV_HEADER[i]))
            })
        };
        records.push(FlightRecord {
            id: number(0)?,
            origin: row[1].to_string(),
            destination: row[2].to_string(),
            airline: row[3].to_string(),
            delay: number(4)?,
        });
    }
    Ok(records)
}

fn export_failure(path: impl Into<PathBuf>, reason: impl ToString) -> CoreError {
    CoreError::ExportFailure {
        path: path.into(),
        reason: reason.to_string(),
    }
}

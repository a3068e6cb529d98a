//! Raw row to [`FlightRecord`] conversion.
//!
//! Delay policy:
//! - null and "empty" values (`0`, `0.0`, `""`) become `0`
//! - integers pass through unchanged, including negative early departures
//! - reals truncate toward zero
//! - text must parse as a base-10 integer after trimming
//! - anything else is [`CoreError::MalformedDelay`]
//!
//! Batches are fail-fast: the first bad row stops the pass.

use crate::error::CoreError;
use crate::flight::{FlightRecord, RawDelay, RawFlight};
use crate::types::DelayMinutes;

/// 2^63, the first f64 past `i64::MAX`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Result of normalizing one response.
///
/// `records` holds every row normalized before `failure`, if any.
#[derive(Debug)]
pub struct NormalizedBatch {
    /// Number of rows the store returned.
    pub rows: usize,
    pub records: Vec<FlightRecord>,
    pub failure: Option<RowFailure>,
}

/// The row that stopped a batch and why.
#[derive(Debug)]
pub struct RowFailure {
    pub index: usize,
    pub error: CoreError,
}

impl NormalizedBatch {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Normalize one raw row.
pub fn normalize(row: &RawFlight) -> Result<FlightRecord, CoreError> {
    let delay = coerce_delay(&row.delay)?;
    Ok(FlightRecord {
        id: row.id.ok_or(CoreError::MissingField { column: "ID" })?,
        origin: required(&row.origin, "ORIGIN_AIRPORT")?,
        destination: required(&row.destination, "DESTINATION_AIRPORT")?,
        airline: required(&row.airline, "AIRLINE")?,
        delay,
    })
}

/// Normalize rows in order, stopping at the first failure.
pub fn normalize_batch(rows: &[RawFlight]) -> NormalizedBatch {
    let mut batch = NormalizedBatch {
        rows: rows.len(),
        records: Vec::with_capacity(rows.len()),
        failure: None,
    };
    for (index, row) in rows.iter().enumerate() {
        match normalize(row) {
            Ok(record) => batch.records.push(record),
            Err(error) => {
                batch.failure = Some(RowFailure { index, error });
                break;
            }
        }
    }
    batch
}

/// Apply the delay policy to a raw delay value.
pub fn coerce_delay(delay: &RawDelay) -> Result<DelayMinutes, CoreError> {
    match delay {
        RawDelay::Null => Ok(0),
        RawDelay::Integer(n) => Ok(*n),
        RawDelay::Real(x) => {
            let truncated = x.trunc();
            if truncated.is_finite()
                && truncated >= i64::MIN as f64
                && truncated < I64_UPPER_BOUND
            {
                Ok(truncated as i64)
            } else {
                Err(malformed(x))
            }
        }
        RawDelay::Text(s) if s.is_empty() => Ok(0),
        RawDelay::Text(s) => s.trim().parse::<DelayMinutes>().map_err(|_| malformed(s)),
        RawDelay::Blob => Err(CoreError::MalformedDelay {
            value: "<blob>".to_string(),
        }),
    }
}

fn malformed(value: impl ToString) -> CoreError {
    CoreError::MalformedDelay {
        value: value.to_string(),
    }
}

fn required(value: &Option<String>, column: &'static str) -> Result<String, CoreError> {
    value.clone().ok_or(CoreError::MissingField { column })
}

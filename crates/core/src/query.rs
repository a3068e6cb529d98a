//! Parameter bundles for the four fixed flight lookups.
//!
//! Values of these types are only constructed through the validation
//! helpers (or directly in tests), so the store layer can bind them
//! without re-checking their shape.

use std::fmt;

use crate::types::{DelayMinutes, FlightId};

/// Lower bound (inclusive) for a departure delay to count as "delayed".
pub const DELAY_THRESHOLD_MINUTES: DelayMinutes = 20;

/// Calendar date split into the independent day/month/year columns the
/// flights relation stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// A three-letter IATA airport code, always upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportCode(String);

impl AirportCode {
    /// Build a code from text the caller has already checked to be three
    /// ASCII letters. Upper-cases before storing.
    pub(crate) fn from_checked(code: &str) -> Self {
        Self(code.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the four supported lookups together with its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightQuery {
    ById(FlightId),
    ByDate(FlightDate),
    /// Case-insensitive substring of the airline display name.
    DelayedByAirline(String),
    DelayedByAirport(AirportCode),
}

impl FlightQuery {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ById(_) => "find_by_id",
            Self::ByDate(_) => "find_by_date",
            Self::DelayedByAirline(_) => "find_delayed_by_airline",
            Self::DelayedByAirport(_) => "find_delayed_by_airport",
        }
    }
}

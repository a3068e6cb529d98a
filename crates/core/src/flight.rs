//! Flight row shapes: the raw row as the store returns it and the
//! canonical record used for display and export.

use std::fmt;

use crate::types::{DelayMinutes, FlightId};

/// The departure delay column exactly as stored.
///
/// SQLite does not enforce column types, so a delay may arrive as any
/// storage class.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDelay {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob,
}

/// A flight row joined with its airline name, before normalization.
///
/// Every column is nullable here; the normalizer decides which absences
/// are acceptable.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFlight {
    pub id: Option<FlightId>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub airline: Option<String>,
    pub delay: RawDelay,
}

/// Canonical flight record. `delay` is never null; an unrecorded delay is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    pub airline: String,
    pub delay: DelayMinutes,
}

impl FlightRecord {
    /// Whether the record should be shown with a delay annotation.
    pub fn is_delayed(&self) -> bool {
        self.delay > 0
    }
}

/// One-line human summary. Early or on-time departures show the route only.
impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} -> {} by {}",
            self.id, self.origin, self.destination, self.airline
        )?;
        if self.is_delayed() {
            write!(f, ", Delay: {} Minutes", self.delay)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(delay: DelayMinutes) -> FlightRecord {
        FlightRecord {
            id: 1042,
            origin: "JFK".into(),
            destination: "LAX".into(),
            airline: "Delta Air Lines Inc.".into(),
            delay,
        }
    }

    #[test]
    fn delayed_summary_has_annotation() {
        assert_eq!(
            record(35).to_string(),
            "1042. JFK -> LAX by Delta Air Lines Inc., Delay: 35 Minutes"
        );
    }

    #[test]
    fn on_time_summary_is_route_only() {
        assert_eq!(
            record(0).to_string(),
            "1042. JFK -> LAX by Delta Air Lines Inc."
        );
    }

    #[test]
    fn early_departure_summary_is_route_only() {
        let early = record(-7);
        assert!(!early.is_delayed());
        assert_eq!(early.to_string(), "1042. JFK -> LAX by Delta Air Lines Inc.");
    }
}

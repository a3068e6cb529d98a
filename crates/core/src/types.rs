/// Flight identifiers are SQLite INTEGER primary keys.
pub type FlightId = i64;

/// Delays are whole minutes. Negative values are early departures.
pub type DelayMinutes = i64;

//! Query catalog for the `flights` and `airlines` tables.
//!
//! Exactly four read-only lookups, all joined to `airlines` so the airline
//! column is the display name rather than the foreign key.

use sqlx::sqlite::SqliteRow;
use sqlx::SqliteConnection;

use flightdesk_core::flight::RawFlight;
use flightdesk_core::query::{AirportCode, FlightDate, FlightQuery, DELAY_THRESHOLD_MINUTES};
use flightdesk_core::types::FlightId;

use crate::rows::decode_flight_row;

/// Select list and join shared by every lookup.
const SELECT_FLIGHTS: &str = "SELECT flights.ID AS ID, \
    flights.ORIGIN_AIRPORT AS ORIGIN_AIRPORT, \
    flights.DESTINATION_AIRPORT AS DESTINATION_AIRPORT, \
    airlines.AIRLINE AS AIRLINE, \
    flights.DEPARTURE_DELAY AS DELAY \
    FROM flights \
    JOIN airlines ON flights.AIRLINE = airlines.ID";

/// Delay filter and worst-first ordering for the two "delayed" lookups.
/// `?2` is the threshold in minutes.
const DELAYED_TAIL: &str = "AND flights.DEPARTURE_DELAY IS NOT NULL \
    AND flights.DEPARTURE_DELAY >= ?2 \
    ORDER BY flights.DEPARTURE_DELAY DESC, flights.ID";

/// Provides the fixed flight lookups.
pub struct FlightRepo;

impl FlightRepo {
    /// Dispatch a typed query to its template.
    pub async fn run(
        conn: &mut SqliteConnection,
        query: &FlightQuery,
    ) -> Result<Vec<RawFlight>, sqlx::Error> {
        match query {
            FlightQuery::ById(id) => Self::find_by_id(conn, *id).await,
            FlightQuery::ByDate(date) => Self::find_by_date(conn, date).await,
            FlightQuery::DelayedByAirline(name) => {
                Self::find_delayed_by_airline(conn, name).await
            }
            FlightQuery::DelayedByAirport(code) => {
                Self::find_delayed_by_airport(conn, code).await
            }
        }
    }

    /// At most one row with exactly this identifier.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: FlightId,
    ) -> Result<Vec<RawFlight>, sqlx::Error> {
        let query = format!("{SELECT_FLIGHTS} WHERE flights.ID = ?1");
        sqlx::query(&query)
            .bind(id)
            .try_map(|row: SqliteRow| decode_flight_row(&row))
            .fetch_all(conn)
            .await
    }

    /// Flights whose DAY, MONTH and YEAR columns each equal the given date part.
    pub async fn find_by_date(
        conn: &mut SqliteConnection,
        date: &FlightDate,
    ) -> Result<Vec<RawFlight>, sqlx::Error> {
        let query = format!(
            "{SELECT_FLIGHTS} \
             WHERE flights.DAY = ?1 AND flights.MONTH = ?2 AND flights.YEAR = ?3 \
             ORDER BY flights.ID"
        );
        sqlx::query(&query)
            .bind(i64::from(date.day))
            .bind(i64::from(date.month))
            .bind(date.year)
            .try_map(|row: SqliteRow| decode_flight_row(&row))
            .fetch_all(conn)
            .await
    }

    /// Delayed flights of every airline whose name contains `airline`,
    /// ignoring ASCII case. The empty string matches all airlines.
    pub async fn find_delayed_by_airline(
        conn: &mut SqliteConnection,
        airline: &str,
    ) -> Result<Vec<RawFlight>, sqlx::Error> {
        let query = format!("{SELECT_FLIGHTS} WHERE airlines.AIRLINE LIKE ?1 {DELAYED_TAIL}");
        sqlx::query(&query)
            .bind(like_pattern(airline))
            .bind(DELAY_THRESHOLD_MINUTES)
            .try_map(|row: SqliteRow| decode_flight_row(&row))
            .fetch_all(conn)
            .await
    }

    /// Delayed flights departing from `airport`. The code is bound as-is;
    /// [`AirportCode`] is already upper-case.
    pub async fn find_delayed_by_airport(
        conn: &mut SqliteConnection,
        airport: &AirportCode,
    ) -> Result<Vec<RawFlight>, sqlx::Error> {
        let query =
            format!("{SELECT_FLIGHTS} WHERE flights.ORIGIN_AIRPORT = ?1 {DELAYED_TAIL}");
        sqlx::query(&query)
            .bind(airport.as_str())
            .bind(DELAY_THRESHOLD_MINUTES)
            .try_map(|row: SqliteRow| decode_flight_row(&row))
            .fetch_all(conn)
            .await
    }
}

/// Wrap a substring in `%` wildcards. `%` and `_` inside the input keep
/// their LIKE meaning.
fn like_pattern(substring: &str) -> String {
    format!("%{substring}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps_input() {
        assert_eq!(like_pattern("delta"), "%delta%");
        assert_eq!(like_pattern(""), "%%");
    }
}

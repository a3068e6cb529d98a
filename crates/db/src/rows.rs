//! Decoding of joined flight rows into [`RawFlight`].

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

use flightdesk_core::flight::{RawDelay, RawFlight};

pub const COL_ID: &str = "ID";
pub const COL_ORIGIN: &str = "ORIGIN_AIRPORT";
pub const COL_DESTINATION: &str = "DESTINATION_AIRPORT";
pub const COL_AIRLINE: &str = "AIRLINE";
pub const COL_DELAY: &str = "DELAY";

/// Map one result row to its fixed-field raw shape.
pub fn decode_flight_row(row: &SqliteRow) -> Result<RawFlight, sqlx::Error> {
    Ok(RawFlight {
        id: row.try_get(COL_ID)?,
        origin: row.try_get(COL_ORIGIN)?,
        destination: row.try_get(COL_DESTINATION)?,
        airline: row.try_get(COL_AIRLINE)?,
        delay: decode_delay(row, COL_DELAY)?,
    })
}

/// Decode the delay by the storage class of the value itself, since SQLite
/// lets a column declared INTEGER hold text or reals.
fn decode_delay(row: &SqliteRow, column: &str) -> Result<RawDelay, sqlx::Error> {
    let value = row.try_get_raw(column)?;
    if value.is_null() {
        return Ok(RawDelay::Null);
    }
    let delay = match value.type_info().name() {
        "INTEGER" => RawDelay::Integer(row.try_get(column)?),
        "REAL" => RawDelay::Real(row.try_get(column)?),
        "TEXT" => RawDelay::Text(row.try_get(column)?),
        _ => RawDelay::Blob,
    };
    Ok(delay)
}

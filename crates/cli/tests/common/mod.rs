//! Shared seed data for the lookup and session tests.

#![allow(dead_code)]

use sqlx::SqlitePool;

use flightdesk_cli::service::FlightLookup;
use flightdesk_db::FlightStore;

/// Seed two airlines and a handful of flights on 1 March 2015.
///
/// | id       | airline | origin | delay  |
/// |----------|---------|--------|--------|
/// | 100      | Delta   | JFK    | 62     |
/// | 101      | Delta   | JFK    | NULL   |
/// | 102      | Delta   | BOS    | 25     |
/// | 103      | United  | JFK    | -4     |
/// | 104      | United  | JFK    | 20     |
pub async fn seed(pool: &SqlitePool) {
    sqlx::query(
        "INSERT INTO airlines (ID, AIRLINE) VALUES \
            (1, 'Delta Air Lines Inc.'), \
            (2, 'United Air Lines Inc.')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO flights \
            (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY) \
         VALUES \
            (100, 2015, 3, 1, 1, 'JFK', 'LAX', 62), \
            (101, 2015, 3, 1, 1, 'JFK', 'ATL', NULL), \
            (102, 2015, 3, 1, 1, 'BOS', 'JFK', 25), \
            (103, 2015, 3, 1, 2, 'JFK', 'ORD', -4), \
            (104, 2015, 3, 1, 2, 'JFK', 'SFO', 20)",
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a row whose delay cannot be read as an integer.
pub async fn insert_malformed(pool: &SqlitePool, id: i64, delay: &str) {
    sqlx::query(
        "INSERT INTO flights \
            (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY) \
         VALUES (?1, 2015, 3, 1, 1, 'JFK', 'MIA', ?2)",
    )
    .bind(id)
    .bind(delay)
    .execute(pool)
    .await
    .unwrap();
}

pub fn lookup(pool: SqlitePool, export_dir: &std::path::Path) -> FlightLookup {
    FlightLookup::new(FlightStore::new(pool), export_dir)
}

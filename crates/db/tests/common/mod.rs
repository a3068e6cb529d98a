//! Seed helpers shared by the store integration tests.

#![allow(dead_code)]

use sqlx::SqlitePool;

pub const DELTA: i64 = 1;
pub const AMERICAN: i64 = 2;
pub const ALASKA: i64 = 3;

/// A flight row to insert. `delay` is bound as an SQL expression so tests
/// can store NULL, text or reals.
pub struct NewFlight<'a> {
    pub id: i64,
    pub date: (i64, i64, i64),
    pub airline: i64,
    pub origin: &'a str,
    pub destination: &'a str,
    pub delay: &'a str,
}

pub fn flight<'a>(id: i64, airline: i64, origin: &'a str, delay: &'a str) -> NewFlight<'a> {
    NewFlight {
        id,
        date: (1, 3, 2015),
        airline,
        origin,
        destination: "LAX",
        delay,
    }
}

pub async fn seed_airlines(pool: &SqlitePool) {
    for (id, name) in [
        (DELTA, "Delta Air Lines Inc."),
        (AMERICAN, "American Airlines Inc."),
        (ALASKA, "Alaska Airlines Inc."),
    ] {
        sqlx::query("INSERT INTO airlines (ID, AIRLINE) VALUES (?1, ?2)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn insert_flight(pool: &SqlitePool, f: &NewFlight<'_>) {
    let (day, month, year) = f.date;
    let sql = format!(
        "INSERT INTO flights \
            (ID, YEAR, MONTH, DAY, AIRLINE, ORIGIN_AIRPORT, DESTINATION_AIRPORT, DEPARTURE_DELAY) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, {})",
        f.delay
    );
    sqlx::query(&sql)
        .bind(f.id)
        .bind(year)
        .bind(month)
        .bind(day)
        .bind(f.airline)
        .bind(f.origin)
        .bind(f.destination)
        .execute(pool)
        .await
        .unwrap();
}

/// Airlines plus a small mixed data set:
///
/// | id | airline  | origin | delay |
/// |----|----------|--------|-------|
/// | 1  | Delta    | JFK    | 45    |
/// | 2  | Delta    | JFK    | NULL  |
/// | 3  | Delta    | ATL    | 120   |
/// | 4  | Delta    | JFK    | 20    |
/// | 5  | Delta    | ATL    | 19    |
/// | 6  | American | JFK    | 75    |
/// | 7  | American | ORD    | -8    |
/// | 8  | Alaska   | SEA    | 0     |
pub async fn seed_flights(pool: &SqlitePool) {
    seed_airlines(pool).await;
    for f in [
        flight(1, DELTA, "JFK", "45"),
        flight(2, DELTA, "JFK", "NULL"),
        flight(3, DELTA, "ATL", "120"),
        flight(4, DELTA, "JFK", "20"),
        flight(5, DELTA, "ATL", "19"),
        flight(6, AMERICAN, "JFK", "75"),
        flight(7, AMERICAN, "ORD", "-8"),
        flight(8, ALASKA, "SEA", "0"),
    ] {
        insert_flight(pool, &f).await;
    }
}

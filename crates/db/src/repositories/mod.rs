//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&mut SqliteConnection` as the first argument.

pub mod flight_repo;

pub use flight_repo::FlightRepo;

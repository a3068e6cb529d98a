//! Domain logic for flight lookups: typed query parameters, input
//! validation, row normalization and CSV export. No database access.

pub mod error;
pub mod export;
pub mod flight;
pub mod normalize;
pub mod query;
pub mod types;
pub mod validation;

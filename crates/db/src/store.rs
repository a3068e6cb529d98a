//! Store adapter: runs catalog queries against the pool and contains
//! every store-level fault.

use flightdesk_core::error::CoreError;
use flightdesk_core::flight::RawFlight;
use flightdesk_core::query::FlightQuery;

use crate::repositories::FlightRepo;
use crate::DbPool;

/// Handle to the flights store.
///
/// Holds no session state. Each call acquires one pooled connection and
/// returns it to the pool when the call finishes.
#[derive(Debug, Clone)]
pub struct FlightStore {
    pool: DbPool,
}

impl FlightStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `query`, surfacing any fault as [`CoreError::StoreFault`].
    pub async fn try_execute(&self, query: &FlightQuery) -> Result<Vec<RawFlight>, CoreError> {
        let mut conn = self.pool.acquire().await.map_err(store_fault)?;
        FlightRepo::run(&mut conn, query).await.map_err(store_fault)
    }

    /// Run `query`, degrading any fault to an empty result.
    ///
    /// The fault is logged; it never reaches the caller.
    pub async fn execute(&self, query: &FlightQuery) -> Vec<RawFlight> {
        match self.try_execute(query).await {
            Ok(rows) => {
                tracing::debug!(query = query.name(), rows = rows.len(), "Query complete");
                rows
            }
            Err(e) => {
                tracing::error!(query = query.name(), error = %e, "Query failed");
                Vec::new()
            }
        }
    }
}

fn store_fault(e: sqlx::Error) -> CoreError {
    CoreError::StoreFault(e.to_string())
}

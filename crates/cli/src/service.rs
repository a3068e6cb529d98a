//! Caller-facing lookup operations.
//!
//! Each lookup runs one query through the store adapter and normalizes the
//! rows. Store faults have already been reduced to an empty result by the
//! time rows arrive here; a malformed row stops normalization for the rest
//! of that response.

use std::path::PathBuf;

use flightdesk_core::error::CoreError;
use flightdesk_core::export::{ensure_csv_extension, export_csv};
use flightdesk_core::flight::FlightRecord;
use flightdesk_core::normalize::{normalize_batch, NormalizedBatch};
use flightdesk_core::query::{AirportCode, FlightDate, FlightQuery};
use flightdesk_core::types::FlightId;
use flightdesk_db::FlightStore;

pub struct FlightLookup {
    store: FlightStore,
    export_dir: PathBuf,
}

impl FlightLookup {
    pub fn new(store: FlightStore, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: export_dir.into(),
        }
    }

    pub async fn find_by_id(&self, id: FlightId) -> NormalizedBatch {
        self.lookup(FlightQuery::ById(id)).await
    }

    pub async fn find_by_date(&self, date: FlightDate) -> NormalizedBatch {
        self.lookup(FlightQuery::ByDate(date)).await
    }

    pub async fn find_delayed_by_airline(&self, airline: &str) -> NormalizedBatch {
        self.lookup(FlightQuery::DelayedByAirline(airline.to_string()))
            .await
    }

    pub async fn find_delayed_by_airport(&self, airport: &AirportCode) -> NormalizedBatch {
        self.lookup(FlightQuery::DelayedByAirport(airport.clone()))
            .await
    }

    /// Write `records` to `name` (with `.csv` appended when missing) under
    /// the export directory. Returns the path written.
    pub fn export_to_file(
        &self,
        records: &[FlightRecord],
        name: &str,
    ) -> Result<PathBuf, CoreError> {
        let path = self.export_dir.join(ensure_csv_extension(name));
        match export_csv(records, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), records = records.len(), "Exported flights");
                Ok(path)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Export failed");
                Err(e)
            }
        }
    }

    async fn lookup(&self, query: FlightQuery) -> NormalizedBatch {
        let rows = self.store.execute(&query).await;
        let batch = normalize_batch(&rows);
        if let Some(failure) = &batch.failure {
            tracing::warn!(
                query = query.name(),
                row = failure.index,
                error = %failure.error,
                "Normalization aborted",
            );
        }
        batch
    }
}

//! Live seeding run: push each catalog collection into its table.

use reelseed_api::{RecordStore, UpsertResponse};

use crate::catalog::Catalog;
use crate::error::SeedError;
use crate::models::CONFLICT_COLUMN;

/// Outcome of a single table upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub table: &'static str,
    pub rows: usize,
    pub response: UpsertResponse,
}

/// Upsert every collection of `catalog` into `store`, in order.
///
/// Stops at the first failure; later tables are not attempted.
pub async fn seed<S: RecordStore>(
    store: &S,
    catalog: &Catalog,
) -> Result<Vec<TableOutcome>, SeedError> {
    let mut outcomes = Vec::new();

    for collection in catalog.collections() {
        let table = collection.table;
        let rows = collection.records.len();

        if rows == 0 {
            tracing::warn!(table, "collection is empty, sending an empty batch");
        }

        tracing::info!(table, rows, "upserting");
        let response = store
            .upsert(table, CONFLICT_COLUMN, collection.records)
            .await
            .map_err(|e| SeedError::Upsert {
                table: table.to_string(),
                source: Box::new(e),
            })?;
        tracing::info!(table, rows, status = response.status, "table seeded");

        outcomes.push(TableOutcome {
            table,
            rows,
            response,
        });
    }

    Ok(outcomes)
}

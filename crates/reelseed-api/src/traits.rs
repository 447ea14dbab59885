//! Trait definitions for record stores.
//!
//! The seeding run only needs to push a batch of rows into a named table, so
//! the live REST client and test doubles share this interface.

use std::future::Future;

use serde::Serialize;

/// A store that accepts batches of rows keyed by a conflict column.
pub trait RecordStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert or update `rows` in `table`. Rows whose `on_conflict` column
    /// matches an existing row replace it.
    fn upsert<T: Serialize + Sync>(
        &self,
        table: &str,
        on_conflict: &str,
        rows: &[T],
    ) -> impl Future<Output = Result<UpsertResponse, Self::Error>> + Send;
}

/// What the store answered to a successful upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertResponse {
    pub status: u16,
    /// Raw response body, usually the representation of the written rows.
    pub body: String,
}

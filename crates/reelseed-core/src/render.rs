//! Dry-run output: the payloads that would be sent, as readable JSON.

use std::io::Write;

use crate::catalog::{Catalog, Collection};
use crate::error::SeedError;

/// Write one collection under a `--- <table> payload ---` header.
pub fn render_collection<W: Write>(out: &mut W, collection: Collection<'_>) -> Result<(), SeedError> {
    let json = serde_json::to_string_pretty(collection.records)?;
    writeln!(out, "--- {} payload ---", collection.table)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Write every collection of `catalog`, followed by a note that nothing was sent.
pub fn render_dry_run<W: Write>(out: &mut W, catalog: &Catalog) -> Result<(), SeedError> {
    for collection in catalog.collections() {
        render_collection(out, collection)?;
    }
    writeln!(out, "-- dry-run: no data sent")?;
    out.flush()?;
    Ok(())
}

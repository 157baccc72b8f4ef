//! Read-only inspection of the live collections.

use crate::db::SalonDb;
use crate::error::Result;

/// What one collection currently holds.
#[derive(Debug)]
pub struct CollectionReport {
    pub name: String,
    /// Document count (0 for a collection that does not exist)
    pub count: usize,
    /// First document returned by the store, if any
    pub sample: Option<serde_json::Value>,
}

/// Fetch and report each named collection, in order.
///
/// Purely read-only; a missing collection reads as empty, not as an error.
pub async fn inspect(db: &SalonDb, collections: &[&str]) -> Result<Vec<CollectionReport>> {
    let mut reports = Vec::with_capacity(collections.len());

    for &name in collections {
        let docs = db.fetch_all_raw(name).await?;
        tracing::info!(collection = name, count = docs.len(), "Inspected collection");

        reports.push(CollectionReport {
            name: name.to_string(),
            count: docs.len(),
            sample: docs.into_iter().next(),
        });
    }

    Ok(reports)
}

// SPDX-License-Identifier: MIT

//! Seed jobs: write the declarative catalog into Firestore.
//!
//! Every seed uses deterministic catalog-position-derived document keys, so
//! reruns overwrite in place instead of accumulating duplicates. A single
//! call is one atomic batch: all records become visible or none do.

use crate::catalog::{keys, Catalog};
use crate::db::{collections, SalonDb};
use crate::error::Result;
use crate::models::Promotion;

/// Seed the `categories` collection. Returns the number of records written.
pub async fn seed_categories(db: &SalonDb, catalog: &Catalog) -> Result<usize> {
    let records: Vec<_> = catalog
        .categories
        .iter()
        .enumerate()
        .map(|(index, category)| (keys::category(index), category.clone()))
        .collect();

    db.seed_batch(collections::CATEGORIES, &records).await?;
    Ok(records.len())
}

/// Seed the `services` collection. Returns the number of records written.
pub async fn seed_services(db: &SalonDb, catalog: &Catalog) -> Result<usize> {
    let records: Vec<_> = catalog
        .services
        .iter()
        .enumerate()
        .map(|(index, service)| (keys::service(index), service.clone()))
        .collect();

    db.seed_batch(collections::SERVICES, &records).await?;
    Ok(records.len())
}

/// Seed the `masters` collection. Returns the number of records written.
pub async fn seed_masters(db: &SalonDb, catalog: &Catalog) -> Result<usize> {
    let records: Vec<_> = catalog
        .masters
        .iter()
        .enumerate()
        .map(|(index, master)| (keys::master(index), master.clone()))
        .collect();

    db.seed_batch(collections::MASTERS, &records).await?;
    Ok(records.len())
}

/// Seed the `promotions` collection, unless it already holds documents.
///
/// The collection-level guard keeps an already-initialized loyalty program
/// untouched: partial prior state is never topped up. Returns the number of
/// records written (0 when the guard skips).
pub async fn seed_promotions(db: &SalonDb, catalog: &Catalog) -> Result<usize> {
    if !db.collection_is_empty(collections::PROMOTIONS).await? {
        tracing::info!("Promotions already initialized, skipping seed");
        return Ok(0);
    }

    let now_ms = chrono::Utc::now().timestamp_millis();
    let records: Vec<(String, Promotion)> = catalog
        .promotions
        .iter()
        .enumerate()
        .map(|(index, seed)| (keys::promotion(index), seed.to_promotion(now_ms)))
        .collect();

    db.seed_batch(collections::PROMOTIONS, &records).await?;
    Ok(records.len())
}

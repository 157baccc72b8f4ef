// SPDX-License-Identifier: MIT

//! Cross-linker: mark which masters can perform which services.
//!
//! Reads the current `services` snapshot, partitions it into category
//! classes via the declarative assignment map, and patches
//! `availableMasters.<masterId> = true` onto every service in one atomic
//! batch. Reruns converge: the flags are plain booleans and no path ever
//! removes one.

use crate::catalog::{CategoryClass, MasterAssignments};
use crate::db::SalonDb;
use crate::error::{AppError, Result};
use crate::models::Service;
use std::collections::BTreeMap;

/// Summary of one link run.
#[derive(Debug, Clone, Copy)]
pub struct LinkSummary {
    /// Services that received at least one flag
    pub services: usize,
    /// Total (service, master) flags written
    pub flags: usize,
}

/// Partition a service snapshot into category-class buckets.
///
/// A service whose category id has no class mapping is not silently
/// dropped: all offenders are collected and reported in one error, and
/// nothing gets linked.
pub fn partition_by_class(
    services: &[Service],
    assignments: &MasterAssignments,
) -> Result<BTreeMap<CategoryClass, Vec<String>>> {
    let mut buckets: BTreeMap<CategoryClass, Vec<String>> = BTreeMap::new();
    let mut unmapped: Vec<String> = Vec::new();

    for service in services {
        let id = service.id.clone().ok_or_else(|| {
            AppError::Database("service document came back without an id".to_string())
        })?;

        match assignments.class_of(&service.category) {
            Some(class) => buckets.entry(class).or_default().push(id),
            None => unmapped.push(format!("{} (category '{}')", id, service.category)),
        }
    }

    if !unmapped.is_empty() {
        unmapped.sort();
        return Err(AppError::UnmappedCategories(unmapped.join(", ")));
    }

    // Snapshot order is whatever the store returned; sort for stable output.
    for ids in buckets.values_mut() {
        ids.sort();
    }
    Ok(buckets)
}

/// Link every assigned master to the services of their category class.
pub async fn link_masters(db: &SalonDb, assignments: &MasterAssignments) -> Result<LinkSummary> {
    let services = db.fetch_services().await?;
    let buckets = partition_by_class(&services, assignments)?;

    let mut links: Vec<(String, Vec<String>)> = Vec::new();
    for (class, service_ids) in &buckets {
        let masters = assignments.masters_for(*class);
        if masters.is_empty() {
            tracing::warn!(
                class = ?class,
                services = service_ids.len(),
                "No masters assigned to class"
            );
            continue;
        }
        for service_id in service_ids {
            links.push((service_id.clone(), masters.to_vec()));
        }
    }

    let flags = db.link_masters_to_services(&links).await?;
    tracing::info!(services = links.len(), flags, "Cross-linking complete");
    Ok(LinkSummary {
        services: links.len(),
        flags,
    })
}

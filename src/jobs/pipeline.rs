// SPDX-License-Identifier: MIT

//! Explicit job pipeline.
//!
//! The seeding order used to be an implicit convention (services before
//! links, categories before services). Here it is data: an ordered list of
//! named steps, each declaring the collections that must already be
//! populated. An empty prerequisite aborts the run before the step touches
//! the database.

use crate::catalog::Catalog;
use crate::db::{collections, SalonDb};
use crate::error::{AppError, Result};
use crate::jobs::{link, seed};

/// A job the pipeline can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    SeedCategories,
    SeedServices,
    SeedMasters,
    LinkMasters,
    SeedPromotions,
}

impl Job {
    async fn run(self, db: &SalonDb, catalog: &Catalog) -> Result<()> {
        match self {
            Job::SeedCategories => {
                let count = seed::seed_categories(db, catalog).await?;
                tracing::info!(count, "Categories seeded");
            }
            Job::SeedServices => {
                let count = seed::seed_services(db, catalog).await?;
                tracing::info!(count, "Services seeded");
            }
            Job::SeedMasters => {
                let count = seed::seed_masters(db, catalog).await?;
                tracing::info!(count, "Masters seeded");
            }
            Job::LinkMasters => {
                link::link_masters(db, &catalog.assignments).await?;
            }
            Job::SeedPromotions => {
                let count = seed::seed_promotions(db, catalog).await?;
                tracing::info!(count, "Promotions seeded");
            }
        }
        Ok(())
    }
}

/// A named pipeline step with its prerequisite collections.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub name: &'static str,
    /// Collections that must be non-empty before this step may run.
    pub requires: &'static [&'static str],
    pub job: Job,
}

/// Categories, then the services that reference them.
pub fn catalog_steps() -> Vec<Step> {
    vec![
        Step {
            name: "seed-categories",
            requires: &[],
            job: Job::SeedCategories,
        },
        Step {
            name: "seed-services",
            requires: &[collections::CATEGORIES],
            job: Job::SeedServices,
        },
    ]
}

/// Masters, then the links that reference both masters and services.
pub fn master_steps() -> Vec<Step> {
    vec![
        Step {
            name: "seed-masters",
            requires: &[],
            job: Job::SeedMasters,
        },
        Step {
            name: "link-masters",
            requires: &[collections::SERVICES, collections::MASTERS],
            job: Job::LinkMasters,
        },
    ]
}

/// The guarded loyalty-program seed.
pub fn promotion_steps() -> Vec<Step> {
    vec![Step {
        name: "seed-promotions",
        requires: &[],
        job: Job::SeedPromotions,
    }]
}

/// The canonical order for populating a fresh database.
pub fn full_pipeline() -> Vec<Step> {
    let mut steps = catalog_steps();
    steps.extend(master_steps());
    steps.extend(promotion_steps());
    steps
}

/// Run steps strictly in order, failing fast on an empty prerequisite.
pub async fn run(db: &SalonDb, catalog: &Catalog, steps: &[Step]) -> Result<()> {
    for step in steps {
        for collection in step.requires {
            if db.collection_is_empty(collection).await? {
                return Err(AppError::EmptyPrerequisite(collection.to_string()));
            }
        }

        tracing::info!(step = step.name, "Running pipeline step");
        step.job.run(db, catalog).await?;
    }
    Ok(())
}

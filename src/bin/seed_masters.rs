// SPDX-License-Identifier: MIT

//! Seed the `masters` collection and link masters to their services.
//!
//! Requires the services seed to have run first; the pipeline aborts before
//! linking if `services` is still empty.

use salon_admin::catalog::Catalog;
use salon_admin::config::Config;
use salon_admin::db::SalonDb;
use salon_admin::jobs::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_admin::init_logging();

    let config = Config::from_env()?;
    tracing::info!(project = %config.gcp_project_id, "Starting masters seed");

    let catalog = Catalog::load_from_dir(&config.catalog_dir)?;
    let db = SalonDb::new(&config.gcp_project_id).await?;

    let result = pipeline::run(&db, &catalog, &pipeline::master_steps()).await;
    match &result {
        Ok(()) => tracing::info!("Masters seed finished"),
        Err(e) => tracing::error!(error = %e, "Masters seed failed"),
    }

    result.map_err(Into::into)
}

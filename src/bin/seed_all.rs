// SPDX-License-Identifier: MIT

//! Populate a fresh database end to end: categories, services, masters,
//! master-service links, promotions.

use salon_admin::catalog::Catalog;
use salon_admin::config::Config;
use salon_admin::db::SalonDb;
use salon_admin::jobs::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_admin::init_logging();

    let config = Config::from_env()?;
    tracing::info!(project = %config.gcp_project_id, "Starting full seed pipeline");

    let catalog = Catalog::load_from_dir(&config.catalog_dir)?;
    let db = SalonDb::new(&config.gcp_project_id).await?;

    let result = pipeline::run(&db, &catalog, &pipeline::full_pipeline()).await;
    match &result {
        Ok(()) => tracing::info!("Full seed pipeline finished"),
        Err(e) => tracing::error!(error = %e, "Seed pipeline failed"),
    }

    result.map_err(Into::into)
}

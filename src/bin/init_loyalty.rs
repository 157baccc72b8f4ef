// SPDX-License-Identifier: MIT

//! Initialize the loyalty program: seed `promotions` unless it already
//! holds documents.

use salon_admin::catalog::Catalog;
use salon_admin::config::Config;
use salon_admin::db::SalonDb;
use salon_admin::jobs::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_admin::init_logging();

    let config = Config::from_env()?;
    tracing::info!(project = %config.gcp_project_id, "Starting loyalty initialization");

    let catalog = Catalog::load_from_dir(&config.catalog_dir)?;
    let db = SalonDb::new(&config.gcp_project_id).await?;

    let result = pipeline::run(&db, &catalog, &pipeline::promotion_steps()).await;
    match &result {
        Ok(()) => tracing::info!("Loyalty initialization finished"),
        Err(e) => tracing::error!(error = %e, "Loyalty initialization failed"),
    }

    result.map_err(Into::into)
}

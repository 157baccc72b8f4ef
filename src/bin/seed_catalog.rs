// SPDX-License-Identifier: MIT

//! Seed the `categories` and `services` collections from the catalog files.

use salon_admin::catalog::Catalog;
use salon_admin::config::Config;
use salon_admin::db::SalonDb;
use salon_admin::jobs::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_admin::init_logging();

    let config = Config::from_env()?;
    tracing::info!(project = %config.gcp_project_id, "Starting catalog seed");

    let catalog = Catalog::load_from_dir(&config.catalog_dir)?;
    let db = SalonDb::new(&config.gcp_project_id).await?;

    let result = pipeline::run(&db, &catalog, &pipeline::catalog_steps()).await;
    match &result {
        Ok(()) => tracing::info!("Catalog seed finished"),
        Err(e) => tracing::error!(error = %e, "Catalog seed failed"),
    }

    // The connection drops on both paths; the result decides the exit code.
    result.map_err(Into::into)
}

// SPDX-License-Identifier: MIT

//! Report what the database currently holds: a document count per
//! collection and a sample document from each non-empty one.

use salon_admin::config::Config;
use salon_admin::db::{collections, SalonDb};
use salon_admin::jobs::inspect;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    salon_admin::init_logging();

    let config = Config::from_env()?;
    let db = SalonDb::new(&config.gcp_project_id).await?;

    let result = inspect::inspect(&db, &collections::ALL).await;
    match &result {
        Ok(reports) => {
            for report in reports {
                println!("{}: {} document(s)", report.name, report.count);
                if let Some(sample) = &report.sample {
                    println!("{}", serde_json::to_string_pretty(sample)?);
                }
            }
        }
        Err(e) => tracing::error!(error = %e, "Database check failed"),
    }

    result.map(|_| ()).map_err(Into::into)
}

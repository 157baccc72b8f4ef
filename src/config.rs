//! Job configuration loaded from environment variables.
//!
//! The Firestore service-account keyfile is not handled here: `gcloud-sdk`
//! reads the standard GOOGLE_APPLICATION_CREDENTIALS path on its own.

use std::env;
use std::path::PathBuf;

/// Configuration shared by all admin jobs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID of the salon database
    pub gcp_project_id: String,
    /// Directory holding the declarative catalog files
    pub catalog_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CATALOG_DIR` defaults to `data/` next to the binary's working
    /// directory, which is where the shipped catalog lives.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            catalog_dir: env::var("CATALOG_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

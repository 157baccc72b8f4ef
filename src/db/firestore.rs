// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides the primitives the admin jobs are built from:
//! - atomic multi-document seed batches (all-or-nothing)
//! - sparse nested-field patches for master-service links
//! - full-collection snapshots and bounded existence probes

use crate::db::collections;
use crate::error::AppError;
use crate::models::Service;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom. A seed call must be atomic
// as a whole, so an oversized batch is rejected instead of chunked.
const BATCH_SIZE: usize = 400;

/// Firestore database client.
#[derive(Clone)]
pub struct SalonDb {
    client: Option<firestore::FirestoreDb>,
}

/// Sparse patch for the `availableMasters` map on a service document.
///
/// Written with a field mask of `availableMasters.<masterId>` paths, so keys
/// not named in the mask survive the update.
#[derive(Serialize, Deserialize)]
struct MasterFlagsPatch {
    #[serde(rename = "availableMasters")]
    available_masters: BTreeMap<String, bool>,
}

impl SalonDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing
        // a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Seed Operations ─────────────────────────────────────────

    /// Write a batch of keyed documents as one atomic transaction.
    ///
    /// Each record is a full-overwrite set under its explicit key, so reruns
    /// with the same keys replace documents in place. Either every record in
    /// the call becomes visible or none do.
    pub async fn seed_batch<T>(&self, collection: &str, records: &[(String, T)]) -> Result<(), AppError>
    where
        T: Serialize + Send + Sync + for<'de> Deserialize<'de>,
    {
        if records.is_empty() {
            return Ok(());
        }
        if records.len() > BATCH_SIZE {
            return Err(AppError::BatchTooLarge {
                count: records.len(),
                limit: BATCH_SIZE,
            });
        }

        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        for (doc_id, record) in records {
            client
                .fluent()
                .update()
                .in_col(collection)
                .document_id(doc_id)
                .object(record)
                .add_to_transaction(&mut transaction)
                .map_err(|e| {
                    AppError::Database(format!(
                        "Failed to stage write for {}/{}: {}",
                        collection, doc_id, e
                    ))
                })?;
        }

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Batch commit failed: {}", e)))?;

        tracing::info!(collection, count = records.len(), "Seed batch committed");
        Ok(())
    }

    // ─── Link Operations ─────────────────────────────────────────

    /// Set `availableMasters.<masterId> = true` flags on service documents.
    ///
    /// All patches are staged into one transaction and committed together.
    /// Each patch carries a field mask naming only the master ids being set,
    /// so flags already present on a service are preserved. Setting a flag
    /// that is already `true` is a no-op, which makes reruns converge.
    ///
    /// Returns the number of (service, master) flags written.
    pub async fn link_masters_to_services(
        &self,
        links: &[(String, Vec<String>)],
    ) -> Result<usize, AppError> {
        let total_flags: usize = links.iter().map(|(_, masters)| masters.len()).sum();
        if total_flags == 0 {
            return Ok(0);
        }
        if links.len() > BATCH_SIZE {
            return Err(AppError::BatchTooLarge {
                count: links.len(),
                limit: BATCH_SIZE,
            });
        }

        let client = self.get_client()?;

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        for (service_id, master_ids) in links {
            if master_ids.is_empty() {
                continue;
            }

            let patch = MasterFlagsPatch {
                available_masters: master_ids.iter().map(|m| (m.clone(), true)).collect(),
            };
            let field_paths: Vec<String> = master_ids
                .iter()
                .map(|m| format!("availableMasters.{}", m))
                .collect();

            client
                .fluent()
                .update()
                .fields(field_paths)
                .in_col(collections::SERVICES)
                .document_id(service_id)
                .object(&patch)
                .add_to_transaction(&mut transaction)
                .map_err(|e| {
                    AppError::Database(format!(
                        "Failed to stage link patch for service {}: {}",
                        service_id, e
                    ))
                })?;
        }

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Link commit failed: {}", e)))?;

        tracing::info!(
            services = links.len(),
            flags = total_flags,
            "Master-service links committed"
        );
        Ok(total_flags)
    }

    // ─── Read Operations ─────────────────────────────────────────

    /// Fetch the full current snapshot of the services collection.
    ///
    /// Document ids are filled in via the `_firestore_id` alias on
    /// [`Service::id`]. Order is whatever the store returns.
    pub async fn fetch_services(&self) -> Result<Vec<Service>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::SERVICES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Fetch an entire collection as raw JSON values (for inspection).
    ///
    /// A collection that does not exist reads back as an empty vec.
    pub async fn fetch_all_raw(&self, collection: &str) -> Result<Vec<serde_json::Value>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collection)
            .obj::<serde_json::Value>()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Bounded existence probe: fetch at most one document.
    pub async fn collection_is_empty(&self, collection: &str) -> Result<bool, AppError> {
        let docs = self
            .get_client()?
            .fluent()
            .select()
            .from(collection)
            .limit(1)
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(docs.is_empty())
    }
}

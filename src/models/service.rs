//! Service model for storage and catalog files.

use crate::models::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bookable service stored in Firestore.
///
/// Field names match what the booking app reads, so documents written here
/// are directly usable by production.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Document id, filled from `_firestore_id` on reads.
    ///
    /// Absent in catalog files (ids are positional) and never written back.
    #[serde(alias = "_firestore_id", default, skip_serializing)]
    pub id: Option<String>,
    /// Display name
    pub name: LocalizedText,
    /// Full description shown on the service page
    pub description: LocalizedText,
    /// Category document id (foreign key into `categories`)
    pub category: String,
    /// Appointment length in minutes
    pub duration: u32,
    /// Price in tenge
    pub price: u32,
    /// Cover photo
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// Masters who can perform this service (master id -> presence flag).
    /// Empty at seed time; populated by the link job.
    #[serde(default)]
    pub available_masters: BTreeMap<String, bool>,
    /// Whether clients can book this service
    pub is_active: bool,
}

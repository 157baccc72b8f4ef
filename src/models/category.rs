//! Service category model for storage and catalog files.

use crate::models::LocalizedText;
use serde::{Deserialize, Serialize};

/// Service category stored in Firestore.
///
/// Document ids are decimal positions ("1", "2", …) in catalog order, and
/// the documents are immutable after seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Display name
    pub name: LocalizedText,
    /// Short description shown under the name
    pub description: LocalizedText,
    /// Cover photo (None for the synthetic "all services" category)
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    /// Position in the category list shown to clients
    pub order: u32,
}

//! Localized text fields.

use serde::{Deserialize, Serialize};

/// User-facing text in the three languages the app ships with.
///
/// Every translation is required; the booking app has no fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ru: String,
    pub kk: String,
    pub en: String,
}

impl LocalizedText {
    /// True when every translation is present and non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.ru, &self.kk, &self.en]
            .iter()
            .all(|s| !s.trim().is_empty())
    }
}

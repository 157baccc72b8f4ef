//! Loyalty promotion model for storage.

use crate::models::LocalizedText;
use serde::{Deserialize, Serialize};

/// Loyalty promotion stored in Firestore.
///
/// Document ids follow the `promo<N>` convention (1-indexed catalog order).
/// The catalog form carries a validity period instead of an absolute end
/// date; see [`crate::catalog::PromotionSeed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Promotion title
    pub title: LocalizedText,
    /// Redemption conditions
    pub description: LocalizedText,
    /// Loyalty points required to redeem
    pub points: u32,
    /// Whether the promotion is currently redeemable
    pub is_active: bool,
    /// Expiry as epoch milliseconds; always later than the seed time
    pub end_date: i64,
}

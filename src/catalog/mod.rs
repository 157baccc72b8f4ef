// SPDX-License-Identifier: MIT

//! Declarative catalog loading and validation.
//!
//! The seed jobs carry no inline data: everything they write lives in JSON
//! files under `data/` (categories, services, masters, promotions, and the
//! master-assignment map). Loading validates every cross-record invariant
//! before a single network call is made, so a bad catalog never reaches the
//! database.

use crate::models::{Category, LocalizedText, Master, Promotion, Service};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Document key conventions, all derived from catalog position.
///
/// Deterministic keys make every seed an upsert: reruns overwrite in place
/// instead of accumulating duplicates.
pub mod keys {
    /// Categories: decimal positions starting at "1".
    pub fn category(index: usize) -> String {
        (index + 1).to_string()
    }

    /// Services: decimal positions starting at "1".
    pub fn service(index: usize) -> String {
        (index + 1).to_string()
    }

    /// Masters: `master<N>`, 1-indexed.
    pub fn master(index: usize) -> String {
        format!("master{}", index + 1)
    }

    /// Promotions: `promo<N>`, 1-indexed.
    pub fn promotion(index: usize) -> String {
        format!("promo{}", index + 1)
    }
}

/// The closed set of category classes used for master assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryClass {
    Hair,
    Nails,
    Makeup,
    Barbershop,
}

/// Declarative master-assignment map (`assignments.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterAssignments {
    /// Category document id -> class. Categories absent here (like the
    /// synthetic "all services" entry) must not be referenced by services.
    pub category_classes: BTreeMap<String, CategoryClass>,
    /// Class -> master document ids allowed to perform its services.
    pub masters: BTreeMap<CategoryClass, Vec<String>>,
}

impl MasterAssignments {
    /// Look up the class of a category document id.
    pub fn class_of(&self, category_id: &str) -> Option<CategoryClass> {
        self.category_classes.get(category_id).copied()
    }

    /// Masters assigned to a class; empty slice when none are.
    pub fn masters_for(&self, class: CategoryClass) -> &[String] {
        self.masters.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Catalog form of a promotion (`promotions.json`).
///
/// Carries a validity period instead of an absolute expiry so the seeded
/// `endDate` is always in the future relative to the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionSeed {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub points: u32,
    pub is_active: bool,
    /// Days the promotion stays redeemable after seeding
    pub valid_for_days: u32,
}

impl PromotionSeed {
    /// Resolve to the stored form, anchored at `now_ms` (epoch milliseconds).
    pub fn to_promotion(&self, now_ms: i64) -> Promotion {
        Promotion {
            title: self.title.clone(),
            description: self.description.clone(),
            points: self.points,
            is_active: self.is_active,
            end_date: now_ms + i64::from(self.valid_for_days) * 86_400_000,
        }
    }
}

/// The full declarative catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub services: Vec<Service>,
    pub masters: Vec<Master>,
    pub promotions: Vec<PromotionSeed>,
    pub assignments: MasterAssignments,
}

impl Catalog {
    /// Load and validate the catalog from a directory of JSON files.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let catalog = Self {
            categories: read_json(dir, "categories.json")?,
            services: read_json(dir, "services.json")?,
            masters: read_json(dir, "masters.json")?,
            promotions: read_json(dir, "promotions.json")?,
            assignments: read_json(dir, "assignments.json")?,
        };
        catalog.validate()?;

        tracing::info!(
            categories = catalog.categories.len(),
            services = catalog.services.len(),
            masters = catalog.masters.len(),
            promotions = catalog.promotions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Check every invariant the seed and link jobs rely on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::Invalid("no categories defined".to_string()));
        }

        for (index, category) in self.categories.iter().enumerate() {
            require_complete(&category.name, || format!("category {}: name", index + 1))?;
            require_complete(&category.description, || {
                format!("category {}: description", index + 1)
            })?;
        }

        let known_master_ids: BTreeSet<String> =
            (0..self.masters.len()).map(keys::master).collect();

        for (index, service) in self.services.iter().enumerate() {
            let label = keys::service(index);
            require_complete(&service.name, || format!("service {}: name", label))?;
            require_complete(&service.description, || {
                format!("service {}: description", label)
            })?;
            if service.duration == 0 {
                return Err(CatalogError::Invalid(format!(
                    "service {}: duration must be positive",
                    label
                )));
            }
            if service.price == 0 {
                return Err(CatalogError::Invalid(format!(
                    "service {}: price must be positive",
                    label
                )));
            }

            // FK check: category must be a seeded position.
            let position: usize = service.category.parse().unwrap_or(0);
            if position == 0 || position > self.categories.len() {
                return Err(CatalogError::Invalid(format!(
                    "service {}: category '{}' does not reference a seeded category",
                    label, service.category
                )));
            }

            // Every seeded service must be linkable.
            if self.assignments.class_of(&service.category).is_none() {
                return Err(CatalogError::Invalid(format!(
                    "service {}: category '{}' has no class mapping in assignments.json",
                    label, service.category
                )));
            }
        }

        for (index, master) in self.masters.iter().enumerate() {
            let label = keys::master(index);
            if master.display_name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{}: displayName must not be blank",
                    label
                )));
            }
            require_complete(&master.description, || format!("{}: description", label))?;
            master
                .schedule
                .validate()
                .map_err(|e| CatalogError::Invalid(format!("{}: {}", label, e)))?;
        }

        for (index, promotion) in self.promotions.iter().enumerate() {
            let label = keys::promotion(index);
            require_complete(&promotion.title, || format!("{}: title", label))?;
            require_complete(&promotion.description, || {
                format!("{}: description", label)
            })?;
            if promotion.points == 0 {
                return Err(CatalogError::Invalid(format!(
                    "{}: points must be positive",
                    label
                )));
            }
            if promotion.valid_for_days == 0 {
                return Err(CatalogError::Invalid(format!(
                    "{}: validForDays must be positive",
                    label
                )));
            }
        }

        for category_id in self.assignments.category_classes.keys() {
            let position: usize = category_id.parse().unwrap_or(0);
            if position == 0 || position > self.categories.len() {
                return Err(CatalogError::Invalid(format!(
                    "assignments: class mapping references unknown category '{}'",
                    category_id
                )));
            }
        }

        for (class, master_ids) in &self.assignments.masters {
            for master_id in master_ids {
                if !known_master_ids.contains(master_id) {
                    return Err(CatalogError::Invalid(format!(
                        "assignments: {:?} references unknown master '{}'",
                        class, master_id
                    )));
                }
            }
        }

        Ok(())
    }
}

fn require_complete<F>(text: &LocalizedText, context: F) -> Result<(), CatalogError>
where
    F: FnOnce() -> String,
{
    if text.is_complete() {
        Ok(())
    } else {
        Err(CatalogError::Invalid(format!(
            "{} is missing a translation",
            context()
        )))
    }
}

fn read_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, CatalogError> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path)
        .map_err(|e| CatalogError::IoError(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| CatalogError::ParseError(format!("{}: {}", path.display(), e)))
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog file: {0}")]
    ParseError(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakInterval, DaySchedule, WeeklySchedule};

    fn text(value: &str) -> LocalizedText {
        LocalizedText {
            ru: value.to_string(),
            kk: value.to_string(),
            en: value.to_string(),
        }
    }

    fn category(order: u32) -> Category {
        Category {
            name: text("name"),
            description: text("description"),
            photo_url: None,
            order,
        }
    }

    fn service(category: &str) -> Service {
        Service {
            id: None,
            name: text("name"),
            description: text("description"),
            category: category.to_string(),
            duration: 60,
            price: 5000,
            photo_url: "https://example.com/s.jpg".to_string(),
            available_masters: BTreeMap::new(),
            is_active: true,
        }
    }

    fn master(name: &str) -> Master {
        Master {
            user_id: "master1".to_string(),
            display_name: name.to_string(),
            specializations: vec!["Парикмахер".to_string()],
            experience: "5 лет".to_string(),
            description: text("bio"),
            photo_url: "https://example.com/m.jpg".to_string(),
            portfolio: vec![],
            schedule: WeeklySchedule {
                monday: Some(DaySchedule {
                    start: "09:00".to_string(),
                    end: "18:00".to_string(),
                    breaks: vec![BreakInterval {
                        start: "13:00".to_string(),
                        end: "14:00".to_string(),
                    }],
                }),
                tuesday: None,
                wednesday: None,
                thursday: None,
                friday: None,
                saturday: None,
                sunday: None,
            },
            rating: 4.8,
            reviews_count: 10,
        }
    }

    fn promotion_seed(points: u32, valid_for_days: u32) -> PromotionSeed {
        PromotionSeed {
            title: text("title"),
            description: text("description"),
            points,
            is_active: true,
            valid_for_days,
        }
    }

    fn minimal_catalog() -> Catalog {
        Catalog {
            categories: vec![category(0), category(1)],
            services: vec![service("2")],
            masters: vec![master("Анна")],
            promotions: vec![promotion_seed(200, 91)],
            assignments: MasterAssignments {
                category_classes: BTreeMap::from([("2".to_string(), CategoryClass::Hair)]),
                masters: BTreeMap::from([(
                    CategoryClass::Hair,
                    vec!["master1".to_string()],
                )]),
            },
        }
    }

    #[test]
    fn test_minimal_catalog_is_valid() {
        minimal_catalog().validate().unwrap();
    }

    #[test]
    fn test_shipped_catalog_loads_and_validates() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
        let catalog = Catalog::load_from_dir(dir).unwrap();

        assert_eq!(catalog.categories.len(), 5);
        assert_eq!(catalog.services.len(), 12);
        assert_eq!(catalog.masters.len(), 4);
        assert_eq!(catalog.promotions.len(), 5);

        // All four classes are mapped and staffed.
        assert_eq!(catalog.assignments.category_classes.len(), 4);
        assert_eq!(catalog.assignments.masters.len(), 4);
    }

    #[test]
    fn test_shipped_schedules_hold_invariants() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
        let catalog = Catalog::load_from_dir(dir).unwrap();

        for master in &catalog.masters {
            master.schedule.validate().unwrap();
        }
    }

    #[test]
    fn test_service_with_dangling_category_rejected() {
        let mut catalog = minimal_catalog();
        catalog.services[0].category = "9".to_string();

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("does not reference"), "{}", err);
    }

    #[test]
    fn test_service_with_unmapped_category_rejected() {
        let mut catalog = minimal_catalog();
        // Category "1" exists but has no class mapping.
        catalog.services[0].category = "1".to_string();

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("no class mapping"), "{}", err);
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut catalog = minimal_catalog();
        catalog.services[0].price = 0;

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("price"), "{}", err);
    }

    #[test]
    fn test_assignment_to_unknown_master_rejected() {
        let mut catalog = minimal_catalog();
        catalog
            .assignments
            .masters
            .insert(CategoryClass::Hair, vec!["master7".to_string()]);

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("master7"), "{}", err);
    }

    #[test]
    fn test_broken_schedule_rejected_with_master_context() {
        let mut catalog = minimal_catalog();
        catalog.masters[0].schedule.monday = Some(DaySchedule {
            start: "18:00".to_string(),
            end: "09:00".to_string(),
            breaks: vec![],
        });

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("master1"), "{}", err);
    }

    #[test]
    fn test_zero_validity_rejected() {
        let mut catalog = minimal_catalog();
        catalog.promotions[0] = promotion_seed(200, 0);

        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("validForDays"), "{}", err);
    }

    #[test]
    fn test_promotion_end_date_is_after_seed_time() {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let promotion = promotion_seed(300, 61).to_promotion(now_ms);

        assert!(promotion.end_date > now_ms);
        assert_eq!(promotion.end_date - now_ms, 61 * 86_400_000);
    }

    #[test]
    fn test_unknown_class_fails_to_parse() {
        let raw = r#"{"categoryClasses": {"2": "spa"}, "masters": {}}"#;
        assert!(serde_json::from_str::<MasterAssignments>(raw).is_err());
    }

    #[test]
    fn test_missing_catalog_file_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();

        let err = Catalog::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
        assert!(err.to_string().contains("categories.json"), "{}", err);
    }

    #[test]
    fn test_malformed_catalog_file_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("categories.json"), "not json").unwrap();

        let err = Catalog::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
        assert!(err.to_string().contains("categories.json"), "{}", err);
    }

    #[test]
    fn test_key_conventions() {
        assert_eq!(keys::category(0), "1");
        assert_eq!(keys::service(11), "12");
        assert_eq!(keys::master(0), "master1");
        assert_eq!(keys::promotion(4), "promo5");
    }
}

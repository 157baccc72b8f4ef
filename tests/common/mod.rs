// SPDX-License-Identifier: MIT

use salon_admin::catalog::Catalog;
use salon_admin::db::SalonDb;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> SalonDb {
    SalonDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Load the catalog shipped under `data/`.
#[allow(dead_code)]
pub fn shipped_catalog() -> Catalog {
    Catalog::load_from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
        .expect("Shipped catalog should load")
}

use crate::db::connection::init_db;
use crate::db::connection::Database;
use crate::db::listings::save_listings;
use crate::domain::normalize::clean;
use crate::scraper::models::RawListing;
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema, under a unique
/// temp path so parallel tests don't trample each other.
pub fn init_test_db(name: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{name}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));

    let db = Database::new(path.to_string_lossy().to_string());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn raw(location: &str, price: &str, features: &str) -> RawListing {
    RawListing {
        location: Some(location.to_string()),
        price: Some(price.to_string()),
        features: Some(features.to_string()),
        last_updated: Some("Added 1 day ago".to_string()),
    }
}

/// Run a batch of raw listings through the cleaner and persist the result,
/// exactly as a scrape run would.
pub fn seed_listings(db: &Database, batch: &[RawListing]) {
    let normalized = clean(batch);
    save_listings(db, 0, &normalized).expect("Failed to seed listings");
}

pub fn seed_sample(db: &Database) {
    seed_listings(
        db,
        &[
            raw("DHA Phase 5", "PKR 2 Crore", "4 Bed 3 Bath"),
            raw("Clifton Block 2", "PKR 85 Lakh", "2 Bed 2 Bath"),
            raw("Gulshan Block 13", "PKR 900000", "3 Bed 1 Bath"),
            raw("Gulshan Block 13", "N/A", "2 Bed 1 Bath"), // dropped by the cleaner
        ],
    );
}

use crate::db::connection::Database;
use crate::domain::listing::NormalizedListing;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::params;

/// Persist one page's worth of normalized listings in a single transaction.
/// Columns mirror the NormalizedListing fields; `run_id` ties rows back to
/// the scrape run that produced them.
pub fn save_listings(
    db: &Database,
    run_id: i64,
    listings: &[NormalizedListing],
) -> Result<(), ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for listing in listings {
            tx.execute(
                r#"
                INSERT INTO listings
                    (run_id, location, price, price_numeric, bedrooms, bathrooms, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    run_id,
                    listing.location,
                    listing.price,
                    listing.price_numeric,
                    listing.bedrooms,
                    listing.bathrooms,
                    now,
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit().map_err(|e| ServerError::DbError(e.to_string()))
    })
}

/// Load the whole dataset in insertion order. The filter engine takes this
/// as a parameter on every request rather than reading shared state.
pub fn load_listings(db: &Database) -> Result<Vec<NormalizedListing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT location, price, price_numeric, bedrooms, bathrooms
                 FROM listings ORDER BY id",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(NormalizedListing {
                    location: row.get(0)?,
                    price: row.get(1)?,
                    price_numeric: row.get(2)?,
                    bedrooms: row.get(3)?,
                    bathrooms: row.get(4)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Distinct locations, alphabetical, for the dashboard's select box.
pub fn distinct_locations(db: &Database) -> Result<Vec<String>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT DISTINCT location FROM listings ORDER BY location")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

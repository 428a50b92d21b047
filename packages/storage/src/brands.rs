// ABOUTME: Brand storage layer using SQLite
// ABOUTME: List, create and delete brands; links follow a deleted brand via ON DELETE CASCADE

use bikelinks_core::{validate_entity_id, validate_name, Brand, BrandCreateInput, Created};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::error::StorageResult;

pub struct BrandStorage {
    pool: SqlitePool,
}

impl BrandStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all brands ordered by name
    pub async fn list_brands(&self) -> StorageResult<Vec<Brand>> {
        debug!("Fetching brands");

        let rows = sqlx::query("SELECT * FROM brands ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_brand).collect()
    }

    /// Create a new brand
    pub async fn create_brand(&self, input: BrandCreateInput) -> StorageResult<Created> {
        let name = validate_name(&input.name, "Brand name")?;

        debug!("Creating brand: {}", name);

        let id = sqlx::query("INSERT INTO brands (name) VALUES (?)")
            .bind(&name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Created { id, name })
    }

    /// Delete a brand together with all of its links
    pub async fn delete_brand(&self, brand_id: i64) -> StorageResult<()> {
        let brand_id = validate_entity_id(brand_id, "Brand id")?;

        debug!("Deleting brand: {}", brand_id);

        sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(brand_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Convert a database row to a Brand
pub(crate) fn row_to_brand(row: &SqliteRow) -> StorageResult<Brand> {
    Ok(Brand {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

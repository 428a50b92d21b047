// ABOUTME: Link storage layer using SQLite
// ABOUTME: Joined listing with brand/category names, CRUD and click counting

use bikelinks_core::{
    validate_entity_id, validate_link_input, CreatedId, Link, LinkInput, LinkWithNames,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::error::StorageResult;

pub struct LinkStorage {
    pool: SqlitePool,
}

impl LinkStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every link with its brand and category names,
    /// ordered by brand name, category name, then title
    pub async fn list_links(&self) -> StorageResult<Vec<LinkWithNames>> {
        debug!("Fetching links");

        let rows = sqlx::query(
            r#"
            SELECT l.*, b.name AS brand_name, c.name AS category_name
            FROM links l
            JOIN brands b ON l.brand_id = b.id
            JOIN categories c ON l.category_id = c.id
            ORDER BY b.name, c.name, l.title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> StorageResult<LinkWithNames> {
                Ok(LinkWithNames {
                    link: row_to_link(row)?,
                    brand_name: row.try_get("brand_name")?,
                    category_name: row.try_get("category_name")?,
                })
            })
            .collect()
    }

    /// Create a new link; clicks start at zero
    pub async fn create_link(&self, input: LinkInput) -> StorageResult<CreatedId> {
        let input = validate_link_input(input)?;

        debug!(
            "Creating link: {} (brand: {}, category: {})",
            input.title, input.brand_id, input.category_id
        );

        let id = sqlx::query(
            r#"
            INSERT INTO links (brand_id, category_id, title, url, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.brand_id)
        .bind(input.category_id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.description)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(CreatedId { id })
    }

    /// Replace every editable field of a link. Missing ids are a no-op.
    pub async fn update_link(&self, link_id: i64, input: LinkInput) -> StorageResult<()> {
        let link_id = validate_entity_id(link_id, "Link id")?;
        let input = validate_link_input(input)?;

        debug!("Updating link: {}", link_id);

        sqlx::query(
            r#"
            UPDATE links
            SET brand_id = ?, category_id = ?, title = ?, url = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(input.brand_id)
        .bind(input.category_id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.description)
        .bind(link_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_link(&self, link_id: i64) -> StorageResult<()> {
        let link_id = validate_entity_id(link_id, "Link id")?;

        debug!("Deleting link: {}", link_id);

        sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Increment the click counter of a link
    pub async fn record_click(&self, link_id: i64) -> StorageResult<()> {
        let link_id = validate_entity_id(link_id, "Link id")?;

        debug!("Recording click on link: {}", link_id);

        sqlx::query("UPDATE links SET clicks = COALESCE(clicks, 0) + 1 WHERE id = ?")
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Convert a database row to a Link
pub(crate) fn row_to_link(row: &SqliteRow) -> StorageResult<Link> {
    Ok(Link {
        id: row.try_get("id")?,
        brand_id: row.try_get("brand_id")?,
        category_id: row.try_get("category_id")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        description: row.try_get("description")?,
        clicks: row.try_get::<Option<i64>, _>("clicks")?.unwrap_or(0),
        created_at: row.try_get("created_at")?,
    })
}

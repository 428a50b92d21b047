// ABOUTME: Inserts the seed catalogue on a single connection
// ABOUTME: Callers pass a transaction so seeding is all-or-nothing

use bikelinks_core::{SEED_BRANDS, SEED_CATEGORIES, SEED_LINKS};
use sqlx::SqliteConnection;

use crate::error::StorageResult;

pub(crate) async fn insert_categories(conn: &mut SqliteConnection) -> StorageResult<()> {
    for name in SEED_CATEGORIES {
        sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

pub(crate) async fn insert_brands(conn: &mut SqliteConnection) -> StorageResult<()> {
    for name in SEED_BRANDS {
        sqlx::query("INSERT INTO brands (name) VALUES (?)")
            .bind(*name)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// Brand and category ids are resolved by name. A sample link whose brand or
/// category no longer exists is skipped. Returns the number of links inserted.
pub(crate) async fn insert_links(conn: &mut SqliteConnection) -> StorageResult<u64> {
    let mut inserted = 0;
    for link in SEED_LINKS {
        inserted += sqlx::query(
            r#"
            INSERT INTO links (brand_id, category_id, title, url, description)
            SELECT b.id, c.id, ?, ?, ?
            FROM brands b, categories c
            WHERE b.name = ? AND c.name = ?
            "#,
        )
        .bind(link.title)
        .bind(link.url)
        .bind(link.description)
        .bind(link.brand)
        .bind(link.category)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

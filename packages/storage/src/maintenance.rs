// ABOUTME: Database maintenance operations: diagnostic state dump, reset and startup seeding
// ABOUTME: Reset deletes everything and re-seeds inside one transaction

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, info};

use crate::brands::row_to_brand;
use crate::categories::row_to_category;
use crate::error::StorageResult;
use crate::links::row_to_link;
use crate::seed;
use bikelinks_core::{Brand, Category, Link};

/// Tables owned by this application, in the order they are dumped
const TABLES: [&str; 3] = ["brands", "categories", "links"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCounts {
    pub brands: i64,
    pub categories: i64,
    pub links: i64,
}

/// One row of `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub notnull: i64,
    pub dflt_value: Option<String>,
    pub pk: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchemas {
    pub brands: Vec<ColumnInfo>,
    pub categories: Vec<ColumnInfo>,
    pub links: Vec<ColumnInfo>,
}

/// Raw table contents ordered by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub links: Vec<Link>,
}

/// Diagnostic snapshot of the whole database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseState {
    pub counts: TableCounts,
    /// Current AUTOINCREMENT value per table, from `sqlite_sequence`
    pub sequences: BTreeMap<String, i64>,
    pub schemas: TableSchemas,
    pub data: TableData,
    pub timestamp: DateTime<Utc>,
}

/// What startup seeding inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_seeded: bool,
    pub brands_seeded: bool,
    pub links_seeded: u64,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.categories_seeded && !self.brands_seeded && self.links_seeded == 0
    }
}

pub struct MaintenanceStorage {
    pool: SqlitePool,
}

impl MaintenanceStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Collect counts, sequences, schemas and full contents of every table
    pub async fn database_state(&self) -> StorageResult<DatabaseState> {
        debug!("Collecting database state");

        // One transaction so every read sees the same snapshot
        let mut tx = self.pool.begin().await?;

        let brands = sqlx::query("SELECT * FROM brands ORDER BY id")
            .fetch_all(&mut *tx)
            .await?
            .iter()
            .map(row_to_brand)
            .collect::<StorageResult<Vec<_>>>()?;

        let categories = sqlx::query("SELECT * FROM categories ORDER BY id")
            .fetch_all(&mut *tx)
            .await?
            .iter()
            .map(row_to_category)
            .collect::<StorageResult<Vec<_>>>()?;

        let links = sqlx::query("SELECT * FROM links ORDER BY id")
            .fetch_all(&mut *tx)
            .await?
            .iter()
            .map(row_to_link)
            .collect::<StorageResult<Vec<_>>>()?;

        let [brands_table, categories_table, links_table] = TABLES;
        let schemas = TableSchemas {
            brands: table_info(&mut tx, brands_table).await?,
            categories: table_info(&mut tx, categories_table).await?,
            links: table_info(&mut tx, links_table).await?,
        };

        let counts = TableCounts {
            brands: count_rows(&mut tx, brands_table).await?,
            categories: count_rows(&mut tx, categories_table).await?,
            links: count_rows(&mut tx, links_table).await?,
        };

        let sequences = sqlx::query("SELECT name, seq FROM sqlite_sequence")
            .fetch_all(&mut *tx)
            .await?
            .iter()
            .map(|row| -> StorageResult<(String, i64)> {
                Ok((row.try_get("name")?, row.try_get("seq")?))
            })
            .collect::<StorageResult<BTreeMap<String, i64>>>()?;

        tx.commit().await?;

        Ok(DatabaseState {
            counts,
            sequences,
            schemas,
            data: TableData {
                brands,
                categories,
                links,
            },
            timestamp: Utc::now(),
        })
    }

    /// Delete every brand, category and link, restart the id sequences and
    /// re-insert the seed catalogue. Runs as a single transaction.
    pub async fn reset_database(&self) -> StorageResult<()> {
        info!("Resetting database to seed data");

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM links").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM categories").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM brands").execute(&mut *tx).await?;

        sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('links', 'categories', 'brands')")
            .execute(&mut *tx)
            .await?;

        seed::insert_categories(&mut tx).await?;
        seed::insert_brands(&mut tx).await?;
        seed::insert_links(&mut tx).await?;

        tx.commit().await?;

        info!("Database reset completed");
        Ok(())
    }

    /// Seed each table that is currently empty. Tables are checked
    /// independently, so existing data is never touched.
    pub async fn seed_if_empty(&self) -> StorageResult<SeedReport> {
        let mut tx = self.pool.begin().await?;
        let mut report = SeedReport::default();

        if count_rows(&mut tx, "categories").await? == 0 {
            info!("Initializing categories...");
            seed::insert_categories(&mut tx).await?;
            report.categories_seeded = true;
        }

        if count_rows(&mut tx, "brands").await? == 0 {
            info!("Initializing brands...");
            seed::insert_brands(&mut tx).await?;
            report.brands_seeded = true;
        }

        if count_rows(&mut tx, "links").await? == 0 {
            info!("Initializing sample links...");
            report.links_seeded = seed::insert_links(&mut tx).await?;
        }

        tx.commit().await?;

        Ok(report)
    }
}

/// `table` must be one of [`TABLES`]; it is interpolated into the statement
async fn count_rows(conn: &mut SqliteConnection, table: &str) -> StorageResult<i64> {
    debug_assert!(TABLES.contains(&table));

    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut *conn)
        .await?;
    Ok(count)
}

/// `table` must be one of [`TABLES`]; it is interpolated into the statement
async fn table_info(conn: &mut SqliteConnection, table: &str) -> StorageResult<Vec<ColumnInfo>> {
    debug_assert!(TABLES.contains(&table));

    let rows = sqlx::query(&format!("PRAGMA table_info({})", table))
        .fetch_all(&mut *conn)
        .await?;

    rows.iter()
        .map(|row| -> StorageResult<ColumnInfo> {
            Ok(ColumnInfo {
                cid: row.try_get("cid")?,
                name: row.try_get("name")?,
                column_type: row.try_get("type")?,
                notnull: row.try_get("notnull")?,
                dflt_value: row.try_get("dflt_value")?,
                pk: row.try_get("pk")?,
            })
        })
        .collect()
}

// ABOUTME: Category storage layer using SQLite
// ABOUTME: Handles CRUD operations for categories, refusing to delete ones still in use

use bikelinks_core::{
    validate_entity_id, validate_name, Category, CategoryCreateInput, CategoryUpdateInput, Created,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

pub struct CategoryStorage {
    pool: SqlitePool,
}

impl CategoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name
    pub async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        debug!("Fetching categories");

        let rows = sqlx::query("SELECT * FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_category).collect()
    }

    /// Create a new category
    pub async fn create_category(&self, input: CategoryCreateInput) -> StorageResult<Created> {
        let name = validate_name(&input.name, "Category name")?;

        debug!("Creating category: {}", name);

        let id = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(&name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Created { id, name })
    }

    /// Rename a category. Renaming an id that does not exist is a no-op.
    pub async fn update_category(
        &self,
        category_id: i64,
        input: CategoryUpdateInput,
    ) -> StorageResult<()> {
        let category_id = validate_entity_id(category_id, "Category id")?;
        let name = validate_name(&input.name, "Category name")?;

        debug!("Renaming category {} to {}", category_id, name);

        sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(&name)
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a category permanently (only if no links are using it)
    pub async fn delete_category(&self, category_id: i64) -> StorageResult<()> {
        let category_id = validate_entity_id(category_id, "Category id")?;

        debug!("Deleting category: {}", category_id);

        // The guarded DELETE takes the write lock before links are counted,
        // so no link can be attached between the check and the delete
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = ? AND NOT EXISTS (SELECT 1 FROM links WHERE category_id = ?)
            "#,
        )
        .bind(category_id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if deleted == 0 {
            let count: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE category_id = ?")
                    .bind(category_id)
                    .fetch_one(&mut *tx)
                    .await?;

            if count > 0 {
                return Err(StorageError::CategoryInUse {
                    id: category_id,
                    count,
                });
            }
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Convert a database row to a Category
pub(crate) fn row_to_category(row: &SqliteRow) -> StorageResult<Category> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

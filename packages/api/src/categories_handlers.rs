// ABOUTME: HTTP request handlers for category operations
// ABOUTME: List, create, rename and delete categories (delete only when unused)

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use bikelinks_core::{Category, CategoryCreateInput, CategoryUpdateInput, Created};
use bikelinks_storage::DbState;
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, SuccessResponse};

/// List all categories ordered by name
pub async fn list_categories(
    State(db): State<DbState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    info!("Listing categories");

    let categories = db
        .category_storage
        .list_categories()
        .await
        .map_err(ApiError::storage("Failed to fetch categories"))?;

    Ok(Json(categories))
}

/// Request body for creating or renaming a category
#[derive(Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

/// Create a new category
pub async fn create_category(
    State(db): State<DbState>,
    request: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<Created>, ApiError> {
    let Json(request) = request?;
    info!("Creating category: {}", request.name);

    let created = db
        .category_storage
        .create_category(CategoryCreateInput { name: request.name })
        .await
        .map_err(ApiError::storage("Failed to create category"))?;

    Ok(Json(created))
}

/// Rename a category
pub async fn update_category(
    State(db): State<DbState>,
    category_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<CategoryRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(category_id) = category_id?;
    let Json(request) = request?;
    info!("Updating category: {}", category_id);

    db.category_storage
        .update_category(category_id, CategoryUpdateInput { name: request.name })
        .await
        .map_err(ApiError::storage("Failed to update category"))?;

    Ok(Json(SuccessResponse::ok()))
}

/// Delete a category (only if no link uses it)
pub async fn delete_category(
    State(db): State<DbState>,
    category_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(category_id) = category_id?;
    info!("Deleting category: {}", category_id);

    db.category_storage
        .delete_category(category_id)
        .await
        .map_err(ApiError::storage("Failed to delete category"))?;

    Ok(Json(SuccessResponse::ok()))
}

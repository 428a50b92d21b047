// ABOUTME: HTTP request handlers for brand operations
// ABOUTME: List, create and delete brands; deleting a brand removes its links

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use bikelinks_core::{Brand, BrandCreateInput, Created};
use bikelinks_storage::DbState;
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, SuccessResponse};

/// List all brands ordered by name
pub async fn list_brands(State(db): State<DbState>) -> Result<Json<Vec<Brand>>, ApiError> {
    info!("Listing brands");

    let brands = db
        .brand_storage
        .list_brands()
        .await
        .map_err(ApiError::storage("Failed to fetch brands"))?;

    Ok(Json(brands))
}

/// Request body for creating a brand
#[derive(Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
}

/// Create a new brand
pub async fn create_brand(
    State(db): State<DbState>,
    request: Result<Json<CreateBrandRequest>, JsonRejection>,
) -> Result<Json<Created>, ApiError> {
    let Json(request) = request?;
    info!("Creating brand: {}", request.name);

    let created = db
        .brand_storage
        .create_brand(BrandCreateInput { name: request.name })
        .await
        .map_err(ApiError::storage("Failed to create brand"))?;

    Ok(Json(created))
}

/// Delete a brand and, through the cascade, all of its links
pub async fn delete_brand(
    State(db): State<DbState>,
    brand_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(brand_id) = brand_id?;
    info!("Deleting brand: {}", brand_id);

    db.brand_storage
        .delete_brand(brand_id)
        .await
        .map_err(ApiError::storage("Failed to delete brand"))?;

    Ok(Json(SuccessResponse::ok()))
}

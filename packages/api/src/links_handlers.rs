// ABOUTME: HTTP request handlers for link operations
// ABOUTME: Joined listing, create/update/delete and click counting

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use bikelinks_core::{CreatedId, LinkInput, LinkWithNames};
use bikelinks_storage::DbState;
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, SuccessResponse};

/// List every link with its brand and category names
pub async fn list_links(State(db): State<DbState>) -> Result<Json<Vec<LinkWithNames>>, ApiError> {
    info!("Listing links");

    let links = db
        .link_storage
        .list_links()
        .await
        .map_err(ApiError::storage("Failed to fetch links"))?;

    Ok(Json(links))
}

/// Request body for creating or replacing a link
#[derive(Deserialize)]
pub struct LinkRequest {
    #[serde(rename = "brandId")]
    pub brand_id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<LinkRequest> for LinkInput {
    fn from(request: LinkRequest) -> Self {
        LinkInput {
            brand_id: request.brand_id,
            category_id: request.category_id,
            title: request.title,
            url: request.url,
            description: request.description,
        }
    }
}

/// Create a new link
pub async fn create_link(
    State(db): State<DbState>,
    request: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<CreatedId>, ApiError> {
    let Json(request) = request?;
    info!(
        "Creating link: {} (brand: {})",
        request.title, request.brand_id
    );

    let created = db
        .link_storage
        .create_link(request.into())
        .await
        .map_err(ApiError::storage("Failed to create link"))?;

    Ok(Json(created))
}

/// Replace every editable field of a link
pub async fn update_link(
    State(db): State<DbState>,
    link_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<LinkRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(link_id) = link_id?;
    let Json(request) = request?;
    info!("Updating link: {}", link_id);

    db.link_storage
        .update_link(link_id, request.into())
        .await
        .map_err(ApiError::storage("Failed to update link"))?;

    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_link(
    State(db): State<DbState>,
    link_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(link_id) = link_id?;
    info!("Deleting link: {}", link_id);

    db.link_storage
        .delete_link(link_id)
        .await
        .map_err(ApiError::storage("Failed to delete link"))?;

    Ok(Json(SuccessResponse::ok()))
}

/// Record that a link was opened
pub async fn record_click(
    State(db): State<DbState>,
    link_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let Path(link_id) = link_id?;
    info!("Recording click: {}", link_id);

    db.link_storage
        .record_click(link_id)
        .await
        .map_err(ApiError::storage("Failed to update click count"))?;

    Ok(Json(SuccessResponse::ok()))
}

// ABOUTME: HTTP API layer for Bikelinks providing REST endpoints and routing
// ABOUTME: Thin axum handlers over the storage package, mounted under /api

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use bikelinks_storage::DbState;

pub mod brands_handlers;
pub mod categories_handlers;
pub mod database_handlers;
pub mod links_handlers;
pub mod response;

pub use response::{ApiError, SuccessResponse};

/// Creates the JSON API router with every `/api/...` route
pub fn create_router() -> Router<DbState> {
    Router::new()
        // Brands
        .route(
            "/api/brands",
            get(brands_handlers::list_brands).post(brands_handlers::create_brand),
        )
        .route("/api/brands/{id}", delete(brands_handlers::delete_brand))
        // Categories
        .route(
            "/api/categories",
            get(categories_handlers::list_categories).post(categories_handlers::create_category),
        )
        .route(
            "/api/categories/{id}",
            put(categories_handlers::update_category).delete(categories_handlers::delete_category),
        )
        // Links
        .route(
            "/api/links",
            get(links_handlers::list_links).post(links_handlers::create_link),
        )
        .route(
            "/api/links/{id}",
            put(links_handlers::update_link)
                .delete(links_handlers::delete_link)
                .patch(links_handlers::record_click),
        )
        // Maintenance
        .route("/api/database-state", get(database_handlers::database_state))
        .route("/api/reset-database", post(database_handlers::reset_database))
}

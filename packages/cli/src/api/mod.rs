use axum::{routing::get, Router};
use bikelinks_storage::DbState;

pub mod client;
pub mod health;

/// Full application router: the browser client, health check and JSON API
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/", get(client::index))
        .route("/api/health", get(health::health_check))
        .merge(bikelinks_api::create_router())
        .with_state(db)
}

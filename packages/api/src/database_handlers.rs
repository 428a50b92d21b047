// ABOUTME: HTTP request handlers for database maintenance
// ABOUTME: Diagnostic state dump and reset to the seed catalogue

use axum::{extract::State, Json};
use bikelinks_storage::{DatabaseState, DbState};
use tracing::info;

use crate::response::{ApiError, SuccessResponse};

/// Dump counts, sequences, schemas and raw rows of every table
pub async fn database_state(State(db): State<DbState>) -> Result<Json<DatabaseState>, ApiError> {
    info!("Getting database state");

    let state = db
        .maintenance
        .database_state()
        .await
        .map_err(ApiError::storage("Failed to get database state"))?;

    Ok(Json(state))
}

/// Wipe all data and re-insert the seed catalogue in one transaction
pub async fn reset_database(State(db): State<DbState>) -> Result<Json<SuccessResponse>, ApiError> {
    info!("Resetting database");

    db.maintenance
        .reset_database()
        .await
        .map_err(ApiError::storage("Failed to reset database"))?;

    Ok(Json(SuccessResponse::with_message(
        "Database reset successfully",
    )))
}

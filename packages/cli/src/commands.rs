// ABOUTME: Maintenance subcommands that run against the database without the server
// ABOUTME: Reset to seed data and dump the diagnostic database state

use anyhow::Context;
use bikelinks_storage::{DatabaseState, TableCounts};

use crate::config::Config;
use crate::server::open_database;

/// Reset the configured database and return the resulting row counts
pub async fn reset_database(config: &Config) -> anyhow::Result<TableCounts> {
    let db = open_database(config).await?;

    db.maintenance
        .reset_database()
        .await
        .context("Failed to reset database")?;
    let state = db
        .maintenance
        .database_state()
        .await
        .context("Failed to get database state")?;

    db.close().await;
    Ok(state.counts)
}

pub async fn database_state(config: &Config) -> anyhow::Result<DatabaseState> {
    let db = open_database(config).await?;

    let state = db
        .maintenance
        .database_state()
        .await
        .context("Failed to get database state")?;

    db.close().await;
    Ok(state)
}

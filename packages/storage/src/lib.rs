// ABOUTME: Data layer for Bikelinks built on SQLite
// ABOUTME: Pool bootstrap, migrations, per-entity storage and maintenance operations

pub mod brands;
pub mod categories;
pub mod db;
pub mod error;
pub mod links;
pub mod maintenance;
mod seed;

pub use brands::BrandStorage;
pub use categories::CategoryStorage;
pub use db::{DbState, IN_MEMORY_PATH};
pub use error::{StorageError, StorageResult};
pub use links::LinkStorage;
pub use maintenance::{
    ColumnInfo, DatabaseState, MaintenanceStorage, SeedReport, TableCounts, TableData,
    TableSchemas,
};

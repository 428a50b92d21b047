// ABOUTME: Storage error type shared by every storage struct
// ABOUTME: Wraps sqlx, migration, IO and validation failures

use bikelinks_core::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Cannot delete category {id}: {count} link(s) are using it")]
    CategoryInUse { id: i64, count: i64 },
}

pub type StorageResult<T> = Result<T, StorageError>;

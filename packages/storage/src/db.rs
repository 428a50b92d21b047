// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and every storage layer

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::brands::BrandStorage;
use crate::categories::CategoryStorage;
use crate::error::{StorageError, StorageResult};
use crate::links::LinkStorage;
use crate::maintenance::MaintenanceStorage;

/// Path value that selects a private in-memory database instead of a file
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub brand_storage: Arc<BrandStorage>,
    pub category_storage: Arc<CategoryStorage>,
    pub link_storage: Arc<LinkStorage>,
    pub maintenance: Arc<MaintenanceStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool that is already migrated
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            brand_storage: Arc::new(BrandStorage::new(pool.clone())),
            category_storage: Arc::new(CategoryStorage::new(pool.clone())),
            link_storage: Arc::new(LinkStorage::new(pool.clone())),
            maintenance: Arc::new(MaintenanceStorage::new(pool.clone())),
            pool,
        }
    }

    /// Open (creating if needed) the database at `database_path`, run
    /// migrations and seed any empty table.
    ///
    /// A path of `:memory:` opens a private in-memory database instead.
    pub async fn init_with_path(database_path: &Path, max_connections: u32) -> StorageResult<Self> {
        if database_path.as_os_str() == IN_MEMORY_PATH {
            return Self::init_in_memory().await;
        }

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let database_url = format!("sqlite:{}", database_path.display());

        debug!("Connecting to database: {}", database_url);

        let options = SqliteConnectOptions::from_str(&database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Database connection established: {}", database_path.display());

        Self::prepare(pool).await
    }

    /// Open a fresh in-memory database with the schema and seed data applied.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// every SQLite in-memory connection is its own database.
    pub async fn init_in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        debug!("In-memory database opened");

        Self::prepare(pool).await
    }

    /// Run migrations and seed empty tables on a freshly opened pool
    async fn prepare(pool: SqlitePool) -> StorageResult<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");

        let state = Self::new(pool);
        let report = state.maintenance.seed_if_empty().await?;
        if !report.is_empty() {
            info!(
                categories = report.categories_seeded,
                brands = report.brands_seeded,
                links = report.links_seeded,
                "Seeded empty tables"
            );
        }

        Ok(state)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and todo storage

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::storage::{StorageError, TodoStorage};

/// Where the backing database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// SQLite file on disk, created if missing
    File(PathBuf),
    /// Ephemeral in-memory database, gone on shutdown
    InMemory,
}

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub todos: Arc<TodoStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let todos = Arc::new(TodoStorage::new(pool.clone()));
        Self { pool, todos }
    }

    /// Open the database, apply pragmas, run migrations, and build storage
    pub async fn init(location: &DatabaseLocation) -> Result<Self, StorageError> {
        let (options, max_connections) = match location {
            DatabaseLocation::File(path) => {
                // Ensure parent directory exists
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
                    }
                }

                debug!("Connecting to database: {}", path.display());

                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);

                (options, 10)
            }
            DatabaseLocation::InMemory => {
                debug!("Connecting to in-memory database");

                // Each :memory: connection is a separate database; a single
                // connection keeps every request on the same one.
                let options =
                    SqliteConnectOptions::from_str(":memory:").map_err(StorageError::Sqlx)?;

                (options, 1)
            }
        };

        // Configure connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(StorageError::Sqlx)?;

        // Configure SQLite settings
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");

        Ok(Self::new(pool))
    }

    /// Close the pool; call on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}

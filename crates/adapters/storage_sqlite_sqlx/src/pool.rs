//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

const CREATE_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    buying_price REAL NOT NULL,
    selling_price REAL NOT NULL
)";

const CREATE_SERVICES: &str = "CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL
)";

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:itech.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and creates any missing tables.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
///
/// Repositories clone the pool and check a connection out per statement,
/// so every request gets its own short-lived handle to the same file.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and create the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema creation fails.
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        create_schema(&pool).await?;
        tracing::info!(url = database_url, "database ready");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Create the `products` and `services` tables if they do not exist yet.
///
/// Safe to run any number of times against the same database.
///
/// # Errors
///
/// Returns [`StorageError`] if a statement fails.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    sqlx::query(CREATE_SERVICES).execute(pool).await?;
    Ok(())
}

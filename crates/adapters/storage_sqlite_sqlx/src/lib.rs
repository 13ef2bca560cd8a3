//! # itech-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `itech-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `products` and `services` tables on startup when absent
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `itech-app` (for port traits) and `itech-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod product_repo;
mod service_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
pub use service_repo::SqliteServiceRepository;

//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use itech_app::ports::ProductRepository;
use itech_domain::error::ItechError;
use itech_domain::id::ProductId;
use itech_domain::product::{NewProduct, Product};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Product`].
struct Wrapper(Product);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Product {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            kind: row.try_get("type")?,
            buying_price: row.try_get("buying_price")?,
            selling_price: row.try_get("selling_price")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO products (name, type, buying_price, selling_price) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str =
    "SELECT id, name, type, buying_price, selling_price FROM products WHERE id = ?";
const SELECT_ALL: &str =
    "SELECT id, name, type, buying_price, selling_price FROM products ORDER BY id";
const UPDATE: &str =
    "UPDATE products SET name = ?, type = ?, buying_price = ?, selling_price = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?";

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductId, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(product.name)
                .bind(product.kind)
                .bind(product.buying_price)
                .bind(product.selling_price)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ProductId::from_i64(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> impl Future<Output = Result<u64, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(product.name)
                .bind(product.kind)
                .bind(product.buying_price)
                .bind(product.selling_price)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: ProductId) -> impl Future<Output = Result<u64, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}

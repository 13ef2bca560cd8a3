//! `SQLite` implementation of [`ServiceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use itech_app::ports::ServiceRepository;
use itech_domain::error::ItechError;
use itech_domain::id::ServiceId;
use itech_domain::service::{NewService, Service};

use crate::error::StorageError;

struct Wrapper(Service);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Service {
            id: ServiceId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO services (name, description, price) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, description, price FROM services WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, description, price FROM services ORDER BY id";
const UPDATE: &str = "UPDATE services SET name = ?, description = ?, price = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM services WHERE id = ?";

/// `SQLite`-backed service repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<ServiceId, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(service.name)
                .bind(service.description)
                .bind(service.price)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ServiceId::from_i64(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, ItechError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, ItechError>> + Send {
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
        id: ServiceId,
        service: NewService,
    ) -> impl Future<Output = Result<u64, ItechError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(service.name)
                .bind(service.description)
                .bind(service.price)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }

    fn delete(&self, id: ServiceId) -> impl Future<Output = Result<u64, ItechError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteServiceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteServiceRepository::new(db.pool().clone())
    }

    fn repair() -> NewService {
        NewService::builder()
            .name("Repair")
            .description("On-site repair")
            .price(49.5)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_service_when_valid() {
        let repo = setup().await;
        let id = repo.create(repair()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, repair().with_id(id));
    }

    #[tokio::test]
    async fn should_delete_service_when_exists() {
        let repo = setup().await;
        let id = repo.create(repair()).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_keep_products_and_services_in_separate_id_spaces() {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        sqlx::query("INSERT INTO products (name, type, buying_price, selling_price) VALUES ('w', 'h', 1, 2)")
            .execute(db.pool())
            .await
            .unwrap();
        let repo = SqliteServiceRepository::new(db.pool().clone());

        let id = repo.create(repair()).await.unwrap();
        assert_eq!(id.as_i64(), 1);
    }

    #[tokio::test]
    async fn should_store_integer_price_as_real() {
        let repo = setup().await;
        let mut service = repair();
        service.price = 20.0;
        let id = repo.create(service).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert!((fetched.price - 20.0).abs() < f64::EPSILON);
    }
}

//! Product service — use-cases for managing products.

use itech_domain::error::{ItechError, NotFoundError};
use itech_domain::id::ProductId;
use itech_domain::product::{NewProduct, Product};

use crate::ports::ProductRepository;

const ENTITY: &str = "Product";

fn not_found(id: ProductId) -> ItechError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new product.
    ///
    /// Duplicate field values are allowed; only the returned id tells
    /// records apart.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_product(&self, product: NewProduct) -> Result<ProductId, ItechError> {
        let id = self.repo.create(product).await?;
        tracing::debug!(%id, "product created");
        Ok(id)
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ItechError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List every product in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Product>, ItechError> {
        self.repo.get_all().await
    }

    /// Replace all fields of an existing product.
    ///
    /// Existence is decided by the affected row count alone.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] if no row was updated, or a storage error.
    pub async fn update_product(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> Result<(), ItechError> {
        match self.repo.update(id, product).await? {
            0 => Err(not_found(id)),
            _ => {
                tracing::debug!(%id, "product updated");
                Ok(())
            }
        }
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] if no row was deleted, or a storage error.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ItechError> {
        match self.repo.delete(id).await? {
            0 => Err(not_found(id)),
            _ => {
                tracing::debug!(%id, "product deleted");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryProductRepo {
        store: Mutex<(i64, BTreeMap<ProductId, Product>)>,
    }

    impl ProductRepository for InMemoryProductRepo {
        fn create(
            &self,
            product: NewProduct,
        ) -> impl Future<Output = Result<ProductId, ItechError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.0 += 1;
            let id = ProductId::from_i64(store.0);
            store.1.insert(id, product.with_id(id));
            async move { Ok(id) }
        }

        fn get_by_id(
            &self,
            id: ProductId,
        ) -> impl Future<Output = Result<Option<Product>, ItechError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ItechError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Product> = store.1.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: ProductId,
            product: NewProduct,
        ) -> impl Future<Output = Result<u64, ItechError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = match store.1.get_mut(&id) {
                Some(existing) => {
                    *existing = product.with_id(id);
                    1
                }
                None => 0,
            };
            async move { Ok(affected) }
        }

        fn delete(&self, id: ProductId) -> impl Future<Output = Result<u64, ItechError>> + Send {
            let mut store = self.store.lock().unwrap();
            let affected = u64::from(store.1.remove(&id).is_some());
            async move { Ok(affected) }
        }
    }

    fn make_service() -> ProductService<InMemoryProductRepo> {
        ProductService::new(InMemoryProductRepo::default())
    }

    fn widget() -> NewProduct {
        NewProduct::builder()
            .name("Widget")
            .kind("Hardware")
            .buying_price(1.5)
            .selling_price(3.0)
            .build()
            .unwrap()
    }

    fn gadget() -> NewProduct {
        NewProduct::builder()
            .name("Gadget")
            .kind("Electronics")
            .buying_price(10.0)
            .selling_price(25.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_read_back_created_product_with_assigned_id() {
        let svc = make_service();
        let id = svc.create_product(widget()).await.unwrap();

        let fetched = svc.get_product(id).await.unwrap();
        assert_eq!(fetched, widget().with_id(id));
    }

    #[tokio::test]
    async fn should_store_product_when_name_is_empty() {
        let svc = make_service();
        let mut product = widget();
        product.name = String::new();

        let id = svc.create_product(product).await.unwrap();
        assert!(svc.get_product(id).await.unwrap().name.is_empty());
    }

    #[tokio::test]
    async fn should_allow_duplicate_products() {
        let svc = make_service();
        let first = svc.create_product(widget()).await.unwrap();
        let second = svc.create_product(widget()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn should_list_all_products_in_id_order() {
        let svc = make_service();
        let a = svc.create_product(widget()).await.unwrap();
        let b = svc.create_product(gadget()).await.unwrap();

        let all = svc.list_products().await.unwrap();
        let ids: Vec<ProductId> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_updating() {
        let svc = make_service();
        let id = svc.create_product(widget()).await.unwrap();

        svc.update_product(id, gadget()).await.unwrap();

        let fetched = svc.get_product(id).await.unwrap();
        assert_eq!(fetched, gadget().with_id(id));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let svc = make_service();
        let missing = ProductId::from_i64(999);

        assert!(matches!(
            svc.get_product(missing).await,
            Err(ItechError::NotFound(_))
        ));
        assert!(matches!(
            svc.update_product(missing, widget()).await,
            Err(ItechError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_product(missing).await,
            Err(ItechError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service();
        let id = svc.create_product(widget()).await.unwrap();

        svc.delete_product(id).await.unwrap();

        assert!(matches!(
            svc.get_product(id).await,
            Err(ItechError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_product(id).await,
            Err(ItechError::NotFound(_))
        ));
    }
}

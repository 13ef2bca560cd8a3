//! Storage port — repository traits for persistence.
//!
//! Storage owns record identity: inserts return the assigned id, and
//! updates and deletes report how many rows they touched so the caller can
//! detect a missing record without a separate existence check.

use std::future::Future;

use itech_domain::error::ItechError;
use itech_domain::id::{ProductId, ServiceId};
use itech_domain::product::{NewProduct, Product};
use itech_domain::service::{NewService, Service};

/// Repository for persisting and querying [`Product`]s.
pub trait ProductRepository {
    /// Insert a new product and return the id storage assigned to it.
    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductId, ItechError>> + Send;

    /// Get a product by its id.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ItechError>> + Send;

    /// Get all products in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ItechError>> + Send;

    /// Replace every field of the product with `id`; returns the affected row count.
    fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> impl Future<Output = Result<u64, ItechError>> + Send;

    /// Delete the product with `id`; returns the affected row count.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<u64, ItechError>> + Send;
}

/// Repository for persisting and querying [`Service`]s.
pub trait ServiceRepository {
    /// Insert a new service and return the id storage assigned to it.
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<ServiceId, ItechError>> + Send;

    /// Get a service by its id.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, ItechError>> + Send;

    /// Get all services in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, ItechError>> + Send;

    /// Replace every field of the service with `id`; returns the affected row count.
    fn update(
        &self,
        id: ServiceId,
        service: NewService,
    ) -> impl Future<Output = Result<u64, ItechError>> + Send;

    /// Delete the service with `id`; returns the affected row count.
    fn delete(&self, id: ServiceId) -> impl Future<Output = Result<u64, ItechError>> + Send;
}

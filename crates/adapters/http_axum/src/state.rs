//! Shared application state for axum handlers.

use std::sync::Arc;

use itech_app::ports::{ProductRepository, ServiceRepository};
use itech_app::services::product_service::ProductService;
use itech_app::services::service_service::ServiceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, SR> {
    /// Product CRUD service.
    pub product_service: Arc<ProductService<PR>>,
    /// Service CRUD service.
    pub service_service: Arc<ServiceService<SR>>,
}

impl<PR, SR> Clone for AppState<PR, SR> {
    fn clone(&self) -> Self {
        Self {
            product_service: Arc::clone(&self.product_service),
            service_service: Arc::clone(&self.service_service),
        }
    }
}

impl<PR, SR> AppState<PR, SR>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(product_service: ProductService<PR>, service_service: ServiceService<SR>) -> Self {
        Self {
            product_service: Arc::new(product_service),
            service_service: Arc::new(service_service),
        }
    }
}

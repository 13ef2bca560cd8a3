//! Service catalogue use-cases.
//!
//! Mirrors [`ProductService`](super::product_service::ProductService) for
//! billable [`Service`] records.

use itech_domain::error::{ItechError, NotFoundError};
use itech_domain::id::ServiceId;
use itech_domain::service::{NewService, Service};

use crate::ports::ServiceRepository;

const ENTITY: &str = "Service";

fn not_found(id: ServiceId) -> ItechError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for [`Service`] CRUD operations.
pub struct ServiceService<R> {
    repo: R,
}

impl<R: ServiceRepository> ServiceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new service record.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_service(&self, service: NewService) -> Result<ServiceId, ItechError> {
        let id = self.repo.create(service).await?;
        tracing::debug!(%id, "service created");
        Ok(id)
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, ItechError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List every service in ascending id order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, ItechError> {
        self.repo.get_all().await
    }

    /// Replace all fields of an existing service.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] if no row was updated, or a storage error.
    pub async fn update_service(
        &self,
        id: ServiceId,
        service: NewService,
    ) -> Result<(), ItechError> {
        match self.repo.update(id, service).await? {
            0 => Err(not_found(id)),
            _ => {
                tracing::debug!(%id, "service updated");
                Ok(())
            }
        }
    }

    /// Delete a service by id.
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::NotFound`] if no row was deleted, or a storage error.
    pub async fn delete_service(&self, id: ServiceId) -> Result<(), ItechError> {
        match self.repo.delete(id).await? {
            0 => Err(not_found(id)),
            _ => {
                tracing::debug!(%id, "service deleted");
                Ok(())
            }
        }
    }
}

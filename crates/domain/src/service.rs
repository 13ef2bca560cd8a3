//! Service — billable work described in free text with a single price.

use serde::Serialize;

use crate::error::{ItechError, ValidationError};
use crate::id::ServiceId;

/// A stored service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// The fields of a service before storage has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewService {
    /// Create a builder for constructing a [`NewService`].
    #[must_use]
    pub fn builder() -> NewServiceBuilder {
        NewServiceBuilder::default()
    }

    /// Attach the id storage assigned to these fields.
    #[must_use]
    pub fn with_id(self, id: ServiceId) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Step-by-step builder for [`NewService`].
#[derive(Debug, Default)]
pub struct NewServiceBuilder {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl NewServiceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder and return a [`NewService`].
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::Validation`] naming the first field that was never set.
    pub fn build(self) -> Result<NewService, ItechError> {
        Ok(NewService {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            description: self
                .description
                .ok_or(ValidationError::MissingField("description"))?,
            price: self.price.ok_or(ValidationError::MissingField("price"))?,
        })
    }
}

//! Product — a sellable good with a category and two prices.

use serde::Serialize;

use crate::error::{ItechError, ValidationError};
use crate::id::ProductId;

/// A stored product.
///
/// Field order matches the wire format: `id`, `name`, `type`,
/// `buying_price`, `selling_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-form category label, `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

/// The fields of a product before storage has assigned it an id.
///
/// Used both for creation and for full replacement on update. Text may be
/// empty and prices may be negative; only presence is required.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub kind: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

impl NewProduct {
    /// Create a builder for constructing a [`NewProduct`].
    #[must_use]
    pub fn builder() -> NewProductBuilder {
        NewProductBuilder::default()
    }

    /// Attach the id storage assigned to these fields.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            kind: self.kind,
            buying_price: self.buying_price,
            selling_price: self.selling_price,
        }
    }
}

/// Step-by-step builder for [`NewProduct`].
#[derive(Debug, Default)]
pub struct NewProductBuilder {
    name: Option<String>,
    kind: Option<String>,
    buying_price: Option<f64>,
    selling_price: Option<f64>,
}

impl NewProductBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn buying_price(mut self, price: f64) -> Self {
        self.buying_price = Some(price);
        self
    }

    #[must_use]
    pub fn selling_price(mut self, price: f64) -> Self {
        self.selling_price = Some(price);
        self
    }

    /// Consume the builder and return a [`NewProduct`].
    ///
    /// # Errors
    ///
    /// Returns [`ItechError::Validation`] naming the first field that was never set.
    pub fn build(self) -> Result<NewProduct, ItechError> {
        Ok(NewProduct {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            kind: self.kind.ok_or(ValidationError::MissingField("type"))?,
            buying_price: self
                .buying_price
                .ok_or(ValidationError::MissingField("buying_price"))?,
            selling_price: self
                .selling_price
                .ok_or(ValidationError::MissingField("selling_price"))?,
        })
    }
}

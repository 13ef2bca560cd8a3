//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ItechError`]
//! via `From`, so callers only ever match on three categories.

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum ItechError {
    /// Input rejected before reaching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The targeted record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence engine failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was never supplied.
    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

/// A lookup, update or delete targeted an id with no matching row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable record kind (`Product`, `Service`).
    pub entity: &'static str,
    /// The id that was requested.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_with_entity_name() {
        let err = NotFoundError {
            entity: "Product",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn should_render_not_found_transparently_through_top_level_error() {
        let err: ItechError = NotFoundError {
            entity: "Service",
            id: "999".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Service not found");
    }

    #[test]
    fn should_name_the_offending_field_when_missing() {
        let err = ValidationError::MissingField("description");
        assert_eq!(err.to_string(), "field `description` is required");
    }
}

//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::get;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use itech_app::ports::{ProductRepository, ServiceRepository};

use crate::state::AppState;

/// Confirmation body returned by update and delete.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Confirmation body returned by create, carrying the assigned id.
#[derive(Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize a price given either as a JSON number or as numeric text
/// (`"10"`, `" 2.5 "`). Non-finite values are rejected.
pub fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => value,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("`{text}` is not a valid number")))?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(D::Error::custom("price must be a finite number"))
    }
}

/// Build the API router.
///
/// Collection routes answer both with and without the trailing slash.
pub fn routes<PR, SR>() -> Router<AppState<PR, SR>>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        // Products
        .route(
            "/products/",
            get(products::list::<PR, SR>).post(products::create::<PR, SR>),
        )
        .route(
            "/products",
            get(products::list::<PR, SR>).post(products::create::<PR, SR>),
        )
        .route(
            "/products/{id}",
            get(products::get::<PR, SR>)
                .put(products::update::<PR, SR>)
                .delete(products::delete::<PR, SR>),
        )
        // Services
        .route(
            "/services/",
            get(services::list::<PR, SR>).post(services::create::<PR, SR>),
        )
        .route(
            "/services",
            get(services::list::<PR, SR>).post(services::create::<PR, SR>),
        )
        .route(
            "/services/{id}",
            get(services::get::<PR, SR>)
                .put(services::update::<PR, SR>)
                .delete(services::delete::<PR, SR>),
        )
}

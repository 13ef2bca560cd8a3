//! JSON REST handlers for products.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use itech_app::ports::{ProductRepository, ServiceRepository};
use itech_domain::id::ProductId;
use itech_domain::product::{NewProduct, Product};

use super::{CreatedBody, MessageBody, lenient_price};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a product.
#[derive(Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_price")]
    pub buying_price: f64,
    #[serde(deserialize_with = "lenient_price")]
    pub selling_price: f64,
}

impl ProductRequest {
    fn into_new_product(self) -> Result<NewProduct, ApiError> {
        Ok(NewProduct::builder()
            .name(self.name)
            .kind(self.kind)
            .buying_price(self.buying_price)
            .selling_price(self.selling_price)
            .build()?)
    }
}

/// Body of the list endpoint.
#[derive(Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ProductList>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum MessageResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /products/`
pub async fn list<PR, SR>(
    State(state): State<AppState<PR, SR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(Json(ProductList { products })))
}

/// `GET /products/{id}`
pub async fn get<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let product = state.product_service.get_product(id).await?;
    Ok(GetResponse::Ok(Json(product)))
}

/// `POST /products/`
pub async fn create<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let product = req.into_new_product()?;
    let id = state.product_service.create_product(product).await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "Product added successfully",
        id: id.as_i64(),
    })))
}

/// `PUT /products/{id}` — full replacement, never a merge.
pub async fn update<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ProductId>, PathRejection>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<MessageResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = body?;
    let product = req.into_new_product()?;
    state.product_service.update_product(id, product).await?;
    Ok(MessageResponse::Ok(Json(MessageBody {
        message: "Product updated successfully",
    })))
}

/// `DELETE /products/{id}`
pub async fn delete<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<MessageResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    state.product_service.delete_product(id).await?;
    Ok(MessageResponse::Ok(Json(MessageBody {
        message: "Product deleted successfully",
    })))
}

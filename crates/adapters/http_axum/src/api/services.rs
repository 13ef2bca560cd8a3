//! JSON REST handlers for services.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use itech_app::ports::{ProductRepository, ServiceRepository};
use itech_domain::id::ServiceId;
use itech_domain::service::{NewService, Service};

use super::{CreatedBody, MessageBody, lenient_price};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a service.
#[derive(Deserialize)]
pub struct ServiceRequest {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
}

impl TryFrom<ServiceRequest> for NewService {
    type Error = ApiError;

    fn try_from(req: ServiceRequest) -> Result<Self, Self::Error> {
        Ok(NewService::builder()
            .name(req.name)
            .description(req.description)
            .price(req.price)
            .build()?)
    }
}

/// Body of the list endpoint.
#[derive(Serialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ServiceList>),
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
    Ok(Json<Service>),
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

/// `GET /services/`
pub async fn list<PR, SR>(
    State(state): State<AppState<PR, SR>>,
) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let services = state.service_service.list_services().await?;
    Ok(ListResponse::Ok(Json(ServiceList { services })))
}

/// `GET /services/{id}`
pub async fn get<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ServiceId>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let service = state.service_service.get_service(id).await?;
    Ok(GetResponse::Ok(Json(service)))
}

/// `POST /services/`
pub async fn create<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    body: Result<Json<ServiceRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let id = state
        .service_service
        .create_service(NewService::try_from(req)?)
        .await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "Service added successfully",
        id: id.as_i64(),
    })))
}

/// `PUT /services/{id}`
pub async fn update<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ServiceId>, PathRejection>,
    body: Result<Json<ServiceRequest>, JsonRejection>,
) -> Result<MessageResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = body?;
    state
        .service_service
        .update_service(id, NewService::try_from(req)?)
        .await?;
    Ok(MessageResponse::Ok(Json(MessageBody {
        message: "Service updated successfully",
    })))
}

/// `DELETE /services/{id}`
pub async fn delete<PR, SR>(
    State(state): State<AppState<PR, SR>>,
    id: Result<Path<ServiceId>, PathRejection>,
) -> Result<MessageResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ServiceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    state.service_service.delete_service(id).await?;
    Ok(MessageResponse::Ok(Json(MessageBody {
        message: "Service deleted successfully",
    })))
}

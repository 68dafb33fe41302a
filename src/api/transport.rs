//! Transport endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::transport::{CreateTransport, Transport, TransportQuery, UpdateTransport},
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List transport options with filters and pagination
#[utoipa::path(
    get,
    path = "/transport",
    tag = "transport",
    security(("bearer_auth" = [])),
    params(TransportQuery),
    responses(
        (status = 200, description = "List of transport options", body = PaginatedResponse<Transport>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_transport(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<TransportQuery>,
) -> AppResult<Json<PaginatedResponse<Transport>>> {
    let (items, total) = state.services.transport.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get transport option by ID
#[utoipa::path(
    get,
    path = "/transport/{id}",
    tag = "transport",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transport ID")),
    responses(
        (status = 200, description = "Transport details", body = Transport),
        (status = 404, description = "Transport not found")
    )
)]
pub async fn get_transport(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Transport>> {
    let transport = state.services.transport.get_by_id(id).await?;
    Ok(Json(transport))
}

/// Create a new transport option
#[utoipa::path(
    post,
    path = "/transport",
    tag = "transport",
    security(("bearer_auth" = [])),
    request_body = CreateTransport,
    responses(
        (status = 201, description = "Transport created", body = Transport),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_transport(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateTransport>,
) -> AppResult<(StatusCode, Json<Transport>)> {
    let created = state.services.transport.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a transport option
#[utoipa::path(
    put,
    path = "/transport/{id}",
    tag = "transport",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transport ID")),
    request_body = UpdateTransport,
    responses(
        (status = 200, description = "Transport updated", body = Transport),
        (status = 404, description = "Transport not found")
    )
)]
pub async fn update_transport(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTransport>,
) -> AppResult<Json<Transport>> {
    let updated = state.services.transport.update(id, &data).await?;
    Ok(Json(updated))
}

/// Soft-delete a transport option
#[utoipa::path(
    delete,
    path = "/transport/{id}",
    tag = "transport",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Transport ID")),
    responses(
        (status = 204, description = "Transport deleted"),
        (status = 404, description = "Transport not found")
    )
)]
pub async fn delete_transport(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.transport.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Attraction endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List attractions with filters and pagination
#[utoipa::path(
    get,
    path = "/attractions",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(AttractionQuery),
    responses(
        (status = 200, description = "List of attractions", body = PaginatedResponse<Attraction>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_attractions(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<AttractionQuery>,
) -> AppResult<Json<PaginatedResponse<Attraction>>> {
    let (items, total) = state.services.attractions.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get attraction by ID
#[utoipa::path(
    get,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Attraction details", body = Attraction),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn get_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Attraction>> {
    let attraction = state.services.attractions.get_by_id(id).await?;
    Ok(Json(attraction))
}

/// Create a new attraction
#[utoipa::path(
    post,
    path = "/attractions",
    tag = "attractions",
    security(("bearer_auth" = [])),
    request_body = CreateAttraction,
    responses(
        (status = 201, description = "Attraction created", body = Attraction),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateAttraction>,
) -> AppResult<(StatusCode, Json<Attraction>)> {
    let created = state.services.attractions.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an attraction
#[utoipa::path(
    put,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    request_body = UpdateAttraction,
    responses(
        (status = 200, description = "Attraction updated", body = Attraction),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn update_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateAttraction>,
) -> AppResult<Json<Attraction>> {
    let updated = state.services.attractions.update(id, &data).await?;
    Ok(Json(updated))
}

/// Soft-delete an attraction
#[utoipa::path(
    delete,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 204, description = "Attraction deleted"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn delete_attraction(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.attractions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

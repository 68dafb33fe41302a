//! Hotel endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::hotel::{CreateHotel, Hotel, HotelQuery, UpdateHotel},
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List hotels with filters and pagination
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    security(("bearer_auth" = [])),
    params(HotelQuery),
    responses(
        (status = 200, description = "List of hotels", body = PaginatedResponse<Hotel>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_hotels(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<HotelQuery>,
) -> AppResult<Json<PaginatedResponse<Hotel>>> {
    let (items, total) = state.services.hotels.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get hotel by ID
#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = Hotel),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn get_hotel(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Hotel>> {
    let hotel = state.services.hotels.get_by_id(id).await?;
    Ok(Json(hotel))
}

/// Create a new hotel
#[utoipa::path(
    post,
    path = "/hotels",
    tag = "hotels",
    security(("bearer_auth" = [])),
    request_body = CreateHotel,
    responses(
        (status = 201, description = "Hotel created", body = Hotel),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_hotel(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateHotel>,
) -> AppResult<(StatusCode, Json<Hotel>)> {
    let created = state.services.hotels.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a hotel
#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotel,
    responses(
        (status = 200, description = "Hotel updated", body = Hotel),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn update_hotel(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateHotel>,
) -> AppResult<Json<Hotel>> {
    let updated = state.services.hotels.update(id, &data).await?;
    Ok(Json(updated))
}

/// Soft-delete a hotel
#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn delete_hotel(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.hotels.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

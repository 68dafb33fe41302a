//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{
        Booking, BookingQuery, CreateBooking, DownloadResponse, UpdateBooking, UpdateBookingStatus,
    },
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List bookings with filters and pagination
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "List of bookings", body = PaginatedResponse<Booking>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<PaginatedResponse<Booking>>> {
    let (items, total) = state.services.bookings.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// Create a booking, optionally seeded from a submission
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid input or itinerary reference"),
        (status = 404, description = "Source submission not found")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let created = state.services.bookings.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Booking is in a terminal status")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    let updated = state.services.bookings.update(id, &data).await?;
    Ok(Json(updated))
}

/// Transition a booking's workflow status
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Status updated", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Transition not allowed")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBookingStatus>,
) -> AppResult<Json<Booking>> {
    let updated = state.services.bookings.update_status(id, data.status).await?;
    Ok(Json(updated))
}

/// Record an itinerary download
#[utoipa::path(
    post,
    path = "/bookings/{id}/download",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Download recorded", body = DownloadResponse),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn record_download(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<DownloadResponse>> {
    let download_count = state.services.bookings.record_download(id).await?;
    Ok(Json(DownloadResponse { id, download_count }))
}

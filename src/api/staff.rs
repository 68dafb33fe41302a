//! Staff account endpoints (admin only)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::staff::{CreateStaffUser, StaffQuery, StaffUser, UpdateStaffUser},
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List staff accounts
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(StaffQuery),
    responses(
        (status = 200, description = "List of staff accounts", body = PaginatedResponse<StaffUser>),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn list_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Query(query): Query<StaffQuery>,
) -> AppResult<Json<PaginatedResponse<StaffUser>>> {
    claims.require_admin()?;
    let (items, total) = state.services.auth.list_staff(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get staff account by ID
#[utoipa::path(
    get,
    path = "/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff account ID")),
    responses(
        (status = 200, description = "Staff account details", body = StaffUser),
        (status = 404, description = "Staff account not found")
    )
)]
pub async fn get_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<StaffUser>> {
    claims.require_admin()?;
    let staff = state.services.auth.get_staff(id).await?;
    Ok(Json(staff))
}

/// Create a staff account
#[utoipa::path(
    post,
    path = "/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaffUser,
    responses(
        (status = 201, description = "Staff account created", body = StaffUser),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn create_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(data): Json<CreateStaffUser>,
) -> AppResult<(StatusCode, Json<StaffUser>)> {
    claims.require_admin()?;
    let created = state.services.auth.create_staff(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a staff account
#[utoipa::path(
    put,
    path = "/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff account ID")),
    request_body = UpdateStaffUser,
    responses(
        (status = 200, description = "Staff account updated", body = StaffUser),
        (status = 404, description = "Staff account not found")
    )
)]
pub async fn update_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateStaffUser>,
) -> AppResult<Json<StaffUser>> {
    claims.require_admin()?;
    let updated = state.services.auth.update_staff(id, &data).await?;
    Ok(Json(updated))
}

/// Soft-delete a staff account
#[utoipa::path(
    delete,
    path = "/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Staff account ID")),
    responses(
        (status = 204, description = "Staff account deleted"),
        (status = 404, description = "Staff account not found"),
        (status = 422, description = "Cannot delete your own account")
    )
)]
pub async fn delete_staff(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;
    state.services.auth.delete_staff(id, &claims).await?;
    Ok(StatusCode::NO_CONTENT)
}

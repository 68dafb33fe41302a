//! Travel submission endpoints
//!
//! Creation is unauthenticated: it is the intake surface the customer-facing
//! site posts to. Everything else requires a staff token.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::submission::{
        CreateSubmission, SubmissionQuery, TravelSubmission, UpdateSubmission,
        UpdateSubmissionStatus,
    },
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List travel submissions with filters and pagination
#[utoipa::path(
    get,
    path = "/submissions",
    tag = "submissions",
    security(("bearer_auth" = [])),
    params(SubmissionQuery),
    responses(
        (status = 200, description = "List of submissions", body = PaginatedResponse<TravelSubmission>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_submissions(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<SubmissionQuery>,
) -> AppResult<Json<PaginatedResponse<TravelSubmission>>> {
    let (items, total) = state.services.submissions.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

/// Get submission by ID
#[utoipa::path(
    get,
    path = "/submissions/{id}",
    tag = "submissions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "Submission details", body = TravelSubmission),
        (status = 404, description = "Submission not found")
    )
)]
pub async fn get_submission(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
) -> AppResult<Json<TravelSubmission>> {
    let submission = state.services.submissions.get_by_id(id).await?;
    Ok(Json(submission))
}

/// File a new travel submission (public intake)
#[utoipa::path(
    post,
    path = "/submissions",
    tag = "submissions",
    request_body = CreateSubmission,
    responses(
        (status = 201, description = "Submission created", body = TravelSubmission),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_submission(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateSubmission>,
) -> AppResult<(StatusCode, Json<TravelSubmission>)> {
    let created = state.services.submissions.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a submission's customer or trip fields
#[utoipa::path(
    put,
    path = "/submissions/{id}",
    tag = "submissions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Submission ID")),
    request_body = UpdateSubmission,
    responses(
        (status = 200, description = "Submission updated", body = TravelSubmission),
        (status = 404, description = "Submission not found")
    )
)]
pub async fn update_submission(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateSubmission>,
) -> AppResult<Json<TravelSubmission>> {
    let updated = state.services.submissions.update(id, &data).await?;
    Ok(Json(updated))
}

/// Transition a submission's workflow status
#[utoipa::path(
    put,
    path = "/submissions/{id}/status",
    tag = "submissions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Submission ID")),
    request_body = UpdateSubmissionStatus,
    responses(
        (status = 200, description = "Status updated", body = TravelSubmission),
        (status = 404, description = "Submission not found"),
        (status = 422, description = "Submission is in a terminal status")
    )
)]
pub async fn update_submission_status(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Path(id): Path<i32>,
    Json(data): Json<UpdateSubmissionStatus>,
) -> AppResult<Json<TravelSubmission>> {
    let updated = state
        .services
        .submissions
        .update_status(id, data.status)
        .await?;
    Ok(Json(updated))
}

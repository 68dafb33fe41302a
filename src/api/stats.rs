//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedStaff;

/// Active catalog entity counts
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct CatalogStats {
    pub attractions: i64,
    pub hotels: i64,
    pub transport: i64,
}

/// Submission counts by workflow status
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SubmissionStats {
    pub total: i64,
    pub pending: i64,
    pub processing: i64,
    pub completed: i64,
    pub cancelled: i64,
}

/// Booking counts by workflow status
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct BookingStats {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub cancelled: i64,
    /// Sum of itinerary download counters across all bookings
    pub total_downloads: i64,
}

/// One month of the bookings time series
#[derive(Debug, Serialize, ToSchema)]
pub struct TimeSeriesEntry {
    /// Month in YYYY-MM format
    pub month: String,
    pub count: i64,
}

/// Dashboard statistics document
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub catalog: CatalogStats,
    pub submissions: SubmissionStats,
    pub bookings: BookingStats,
    /// Bookings created per month, trailing 12 months
    pub bookings_by_month: Vec<TimeSeriesEntry>,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}

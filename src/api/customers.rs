//! Customer endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::customer::{CustomerQuery, CustomerSummary},
};

use super::{AuthenticatedStaff, PaginatedResponse};

/// List customer aggregates across submissions and bookings
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    security(("bearer_auth" = [])),
    params(CustomerQuery),
    responses(
        (status = 200, description = "List of customers", body = PaginatedResponse<CustomerSummary>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_customers(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<PaginatedResponse<CustomerSummary>>> {
    let (items, total) = state.services.customers.list(&query).await?;
    Ok(Json(PaginatedResponse::new(items, total, query.page, query.per_page)))
}

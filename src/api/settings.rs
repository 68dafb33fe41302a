//! System settings endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedStaff;

/// Agency-wide settings document
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub agency_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub whatsapp_number: Option<String>,
    /// ISO 4217 currency code used for displayed prices
    pub default_currency: String,
}

/// Settings update request; only provided keys are written
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub agency_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub whatsapp_number: Option<String>,
    pub default_currency: Option<String>,
}

/// Get system settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(_claims): AuthenticatedStaff,
) -> AppResult<Json<SettingsResponse>> {
    let settings = state.services.settings.get_settings().await?;
    Ok(Json(settings))
}

/// Update system settings (admin only)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponse),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    AuthenticatedStaff(claims): AuthenticatedStaff,
    Json(request): Json<UpdateSettingsRequest>,
) -> AppResult<Json<SettingsResponse>> {
    claims.require_admin()?;
    let settings = state.services.settings.update_settings(request).await?;
    Ok(Json(settings))
}

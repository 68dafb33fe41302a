//! Transport option model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Transport option record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transport {
    pub id: i32,
    /// Display label, e.g. "Toyota Previa (7 seats)"
    pub label: String,
    /// Vehicle class, e.g. "sedan", "suv", "minibus", "coach"
    pub transport_type: Option<String>,
    /// Daily hire cost in AED
    pub cost_per_day: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create transport request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransport {
    #[validate(length(min = 2, message = "Label must be at least 2 characters"))]
    pub label: String,
    pub transport_type: Option<String>,
    pub cost_per_day: Decimal,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Update transport request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTransport {
    #[validate(length(min = 2, message = "Label must be at least 2 characters"))]
    pub label: Option<String>,
    pub transport_type: Option<String>,
    pub cost_per_day: Option<Decimal>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Transport list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct TransportQuery {
    /// Filter by vehicle class (exact match, case-insensitive)
    pub transport_type: Option<String>,
    /// Free-text search on label and description
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

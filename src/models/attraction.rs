//! Attraction model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::Emirate;

/// Attraction record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attraction {
    pub id: i32,
    pub name: String,
    pub emirate: Emirate,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Adult ticket price in AED
    pub price: Decimal,
    pub child_price: Option<Decimal>,
    pub infant_price: Option<Decimal>,
    /// Free-form duration label, e.g. "4 hours" or "Full day"
    pub duration: Option<String>,
    /// Average visitor rating, 0.0 to 5.0
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create attraction request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAttraction {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    pub emirate: Emirate,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Decimal,
    pub child_price: Option<Decimal>,
    pub infant_price: Option<Decimal>,
    pub duration: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Update attraction request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAttraction {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub emirate: Option<Emirate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub child_price: Option<Decimal>,
    pub infant_price: Option<Decimal>,
    pub duration: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Attraction list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AttractionQuery {
    /// Filter by emirate slug
    pub emirate: Option<Emirate>,
    /// Filter by category (exact match, case-insensitive)
    pub category: Option<String>,
    /// Free-text search on name and description
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

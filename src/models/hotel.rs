//! Hotel model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::Emirate;

/// Hotel record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    /// Star rating, 1 to 7 (Burj Al Arab claims 7)
    pub stars: i16,
    pub category: Option<String>,
    pub location: Emirate,
    /// Lower bound of the nightly rate range in AED
    pub price_min: Decimal,
    /// Upper bound of the nightly rate range in AED
    pub price_max: Decimal,
    pub amenities: Vec<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create hotel request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHotel {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(range(min = 1, max = 7, message = "Stars must be between 1 and 7"))]
    pub stars: i16,
    pub category: Option<String>,
    pub location: Emirate,
    pub price_min: Decimal,
    pub price_max: Decimal,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Update hotel request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateHotel {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 1, max = 7, message = "Stars must be between 1 and 7"))]
    pub stars: Option<i16>,
    pub category: Option<String>,
    pub location: Option<Emirate>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

/// Hotel list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct HotelQuery {
    /// Filter by emirate slug
    pub location: Option<Emirate>,
    /// Filter by exact star rating
    pub stars: Option<i16>,
    /// Free-text search on name and description
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

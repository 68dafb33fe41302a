//! Derived customer summary types
//!
//! There is no customers table: the dashboard's customer view is an
//! aggregation over submissions and bookings grouped by email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Per-customer aggregate across submissions and bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomerSummary {
    pub email: String,
    /// Most recently seen customer name for this email
    pub customer_name: String,
    pub phone: Option<String>,
    pub submission_count: i64,
    pub booking_count: i64,
    pub last_activity: DateTime<Utc>,
}

/// Customer list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct CustomerQuery {
    /// Free-text search on name and email
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

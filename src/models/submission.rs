//! Travel submission model and related types
//!
//! A submission is the raw trip request a customer files through the intake
//! form; staff review it and may turn it into a booking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::SubmissionStatus;

/// Travel submission record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TravelSubmission {
    pub id: i32,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Trip length in days
    pub duration_days: i32,
    /// Requested month of travel, e.g. "2026-11" or "November"
    pub travel_month: Option<String>,
    /// Emirate slugs the customer wants to visit
    pub emirates: Vec<String>,
    /// Total budget in AED
    pub budget: Option<Decimal>,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    /// Always adults + children + infants; recomputed on every write
    pub total_travelers: i32,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Traveler counts shared by create and update payloads
pub fn total_travelers(adults: i32, children: i32, infants: i32) -> i32 {
    adults + children + infants
}

/// Create travel submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubmission {
    #[validate(length(min = 2, message = "Customer name must be at least 2 characters"))]
    pub customer_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(range(min = 1, max = 60, message = "Trip duration must be 1 to 60 days"))]
    pub duration_days: i32,
    pub travel_month: Option<String>,
    #[serde(default)]
    pub emirates: Vec<String>,
    pub budget: Option<Decimal>,
    #[validate(range(min = 1, max = 100, message = "Adults must be between 1 and 100"))]
    pub adults: i32,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub children: i32,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub infants: i32,
}

/// Update travel submission request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubmission {
    #[validate(length(min = 2, message = "Customer name must be at least 2 characters"))]
    pub customer_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(range(min = 1, max = 60, message = "Trip duration must be 1 to 60 days"))]
    pub duration_days: Option<i32>,
    pub travel_month: Option<String>,
    pub emirates: Option<Vec<String>>,
    pub budget: Option<Decimal>,
    #[validate(range(min = 1, max = 100, message = "Adults must be between 1 and 100"))]
    pub adults: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub children: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub infants: Option<i32>,
}

/// Status transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSubmissionStatus {
    pub status: SubmissionStatus,
}

/// Submission list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct SubmissionQuery {
    /// Filter by workflow status
    pub status: Option<SubmissionStatus>,
    /// Free-text search on customer name, email and phone
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_create() -> CreateSubmission {
        CreateSubmission {
            customer_name: "Fatima Rahman".to_string(),
            email: "fatima@example.com".to_string(),
            phone: Some("+971501234567".to_string()),
            duration_days: 5,
            travel_month: Some("2026-11".to_string()),
            emirates: vec!["dubai".to_string(), "abu-dhabi".to_string()],
            budget: None,
            adults: 2,
            children: 1,
            infants: 1,
        }
    }

    #[test]
    fn total_travelers_sums_all_groups() {
        assert_eq!(total_travelers(2, 1, 1), 4);
        assert_eq!(total_travelers(1, 0, 0), 1);
    }

    #[test]
    fn create_submission_validates() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_submission_rejects_zero_adults() {
        let mut payload = valid_create();
        payload.adults = 0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_submission_rejects_absurd_traveler_counts() {
        let mut payload = valid_create();
        payload.adults = i32::MAX;
        assert!(payload.validate().is_err());

        let mut payload = valid_create();
        payload.children = 101;
        assert!(payload.validate().is_err());

        let mut payload = valid_create();
        payload.infants = i32::MAX;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_submission_rejects_bad_email() {
        let mut payload = valid_create();
        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_submission_rejects_overlong_trip() {
        let mut payload = valid_create();
        payload.duration_days = 90;
        assert!(payload.validate().is_err());
    }
}

//! Booking model and related types
//!
//! A booking is a staff-curated trip, optionally derived from a travel
//! submission, with a day-by-day itinerary referencing catalog entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::BookingStatus;

/// One day of a booking itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDay {
    /// Day number, 1-based, unique within the itinerary
    pub day: i32,
    pub title: String,
    pub description: Option<String>,
    /// Hotel for the night, if any
    pub hotel_id: Option<i32>,
    /// Transport for the day, if any
    pub transport_id: Option<i32>,
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Submission this booking was created from, if any
    pub submission_id: Option<i32>,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub duration_days: i32,
    pub travel_month: Option<String>,
    pub emirates: Vec<String>,
    pub budget: Option<Decimal>,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub total_travelers: i32,
    #[schema(value_type = Vec<ItineraryDay>)]
    pub itinerary: Json<Vec<ItineraryDay>>,
    pub status: BookingStatus,
    /// Number of times the itinerary document was downloaded
    pub download_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    /// When set, customer and trip fields default to the submission's values
    pub from_submission_id: Option<i32>,
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
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

/// Update booking request (partial)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBooking {
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
    pub itinerary: Option<Vec<ItineraryDay>>,
}

/// Status transition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

/// Response for the itinerary download counter
#[derive(Debug, Serialize, ToSchema)]
pub struct DownloadResponse {
    pub id: i32,
    pub download_count: i32,
}

/// Booking list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Filter by workflow status
    pub status: Option<BookingStatus>,
    /// Free-text search on customer name, email and phone
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Validate itinerary day numbering against the trip duration.
///
/// Day numbers must be unique and within 1..=duration_days. Reference checks
/// against the catalog happen in the bookings service, which has pool access.
pub fn validate_itinerary_days(itinerary: &[ItineraryDay], duration_days: i32) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for entry in itinerary {
        if entry.day < 1 || entry.day > duration_days {
            return Err(format!(
                "Itinerary day {} is outside the trip duration of {} days",
                entry.day, duration_days
            ));
        }
        if !seen.insert(entry.day) {
            return Err(format!("Duplicate itinerary entry for day {}", entry.day));
        }
        if entry.title.trim().is_empty() {
            return Err(format!("Itinerary day {} has an empty title", entry.day));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i32) -> ItineraryDay {
        ItineraryDay {
            day: n,
            title: format!("Day {}", n),
            description: None,
            hotel_id: None,
            transport_id: None,
        }
    }

    #[test]
    fn itinerary_accepts_unique_days_in_range() {
        let days = vec![day(1), day(2), day(3)];
        assert!(validate_itinerary_days(&days, 3).is_ok());
    }

    #[test]
    fn itinerary_rejects_day_beyond_duration() {
        let days = vec![day(1), day(4)];
        let err = validate_itinerary_days(&days, 3).unwrap_err();
        assert!(err.contains("outside the trip duration"));
    }

    #[test]
    fn itinerary_rejects_duplicate_days() {
        let days = vec![day(2), day(2)];
        let err = validate_itinerary_days(&days, 5).unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn itinerary_rejects_day_zero() {
        let days = vec![day(0)];
        assert!(validate_itinerary_days(&days, 5).is_err());
    }

    #[test]
    fn itinerary_rejects_empty_title() {
        let days = vec![ItineraryDay {
            day: 1,
            title: "  ".to_string(),
            description: None,
            hotel_id: None,
            transport_id: None,
        }];
        assert!(validate_itinerary_days(&days, 5).is_err());
    }

    #[test]
    fn itinerary_day_serde_round_trip() {
        let entry = ItineraryDay {
            day: 2,
            title: "Desert safari".to_string(),
            description: Some("Dune bashing and camp dinner".to_string()),
            hotel_id: Some(7),
            transport_id: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ItineraryDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}

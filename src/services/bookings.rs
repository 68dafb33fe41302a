//! Bookings service
//!
//! Holds the business rules around booking assembly: merging submission data
//! into new bookings, itinerary validation against the catalog, and the
//! status state machine.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            validate_itinerary_days, Booking, BookingQuery, CreateBooking, ItineraryDay,
            UpdateBooking,
        },
        enums::BookingStatus,
        submission::total_travelers,
    },
    repository::{bookings::NewBooking, Repository},
};

use super::submissions::validate_emirates;

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &BookingQuery) -> AppResult<(Vec<Booking>, i64)> {
        self.repository.bookings.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Create a booking, either standalone or seeded from a submission.
    ///
    /// Request fields override submission fields where both are present.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        data.validate()?;

        let source = match data.from_submission_id {
            Some(submission_id) => Some(self.repository.submissions.get_by_id(submission_id).await?),
            None => None,
        };

        let customer_name = data
            .customer_name
            .clone()
            .or_else(|| source.as_ref().map(|s| s.customer_name.clone()))
            .ok_or_else(|| AppError::Validation("customer_name is required".to_string()))?;
        let email = data
            .email
            .clone()
            .or_else(|| source.as_ref().map(|s| s.email.clone()))
            .ok_or_else(|| AppError::Validation("email is required".to_string()))?;
        let phone = data
            .phone
            .clone()
            .or_else(|| source.as_ref().and_then(|s| s.phone.clone()));
        let duration_days = data
            .duration_days
            .or_else(|| source.as_ref().map(|s| s.duration_days))
            .ok_or_else(|| AppError::Validation("duration_days is required".to_string()))?;
        let travel_month = data
            .travel_month
            .clone()
            .or_else(|| source.as_ref().and_then(|s| s.travel_month.clone()));
        let emirates = data
            .emirates
            .clone()
            .or_else(|| source.as_ref().map(|s| s.emirates.clone()))
            .unwrap_or_default();
        let budget = data.budget.or_else(|| source.as_ref().and_then(|s| s.budget));
        let adults = data
            .adults
            .or_else(|| source.as_ref().map(|s| s.adults))
            .ok_or_else(|| AppError::Validation("adults is required".to_string()))?;
        let children = data
            .children
            .or_else(|| source.as_ref().map(|s| s.children))
            .unwrap_or(0);
        let infants = data
            .infants
            .or_else(|| source.as_ref().map(|s| s.infants))
            .unwrap_or(0);

        validate_emirates(&emirates)?;
        self.check_itinerary(&data.itinerary, duration_days).await?;

        let new_booking = NewBooking {
            submission_id: source.as_ref().map(|s| s.id),
            customer_name,
            email,
            phone,
            duration_days,
            travel_month,
            emirates,
            budget,
            adults,
            children,
            infants,
            total_travelers: total_travelers(adults, children, infants),
            itinerary: data.itinerary.clone(),
        };

        self.repository.bookings.create(&new_booking).await
    }

    /// Merge a partial update onto the stored booking and persist it
    pub async fn update(&self, id: i32, data: &UpdateBooking) -> AppResult<Booking> {
        data.validate()?;

        let mut merged = self.repository.bookings.get_by_id(id).await?;
        if merged.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Booking {} is {} and cannot be modified",
                id, merged.status
            )));
        }

        if let Some(ref v) = data.customer_name {
            merged.customer_name = v.clone();
        }
        if let Some(ref v) = data.email {
            merged.email = v.clone();
        }
        if data.phone.is_some() {
            merged.phone = data.phone.clone();
        }
        if let Some(v) = data.duration_days {
            merged.duration_days = v;
        }
        if data.travel_month.is_some() {
            merged.travel_month = data.travel_month.clone();
        }
        if let Some(ref v) = data.emirates {
            validate_emirates(v)?;
            merged.emirates = v.clone();
        }
        if data.budget.is_some() {
            merged.budget = data.budget;
        }
        if let Some(v) = data.adults {
            merged.adults = v;
        }
        if let Some(v) = data.children {
            merged.children = v;
        }
        if let Some(v) = data.infants {
            merged.infants = v;
        }
        if let Some(ref v) = data.itinerary {
            merged.itinerary = sqlx::types::Json(v.clone());
        }
        merged.total_travelers = total_travelers(merged.adults, merged.children, merged.infants);

        // Revalidate whenever either side of the day/duration pair moved
        self.check_itinerary(&merged.itinerary.0, merged.duration_days)
            .await?;

        self.repository.bookings.update(&merged).await
    }

    /// Transition a booking's workflow status along the allowed edges
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        let current = self.repository.bookings.get_by_id(id).await?;
        if !current.status.can_transition_to(status) {
            return Err(AppError::BusinessRule(format!(
                "Booking {} cannot move from {} to {}",
                id, current.status, status
            )));
        }
        self.repository.bookings.update_status(id, status).await
    }

    /// Record an itinerary download and return the new counter value
    pub async fn record_download(&self, id: i32) -> AppResult<i32> {
        self.repository.bookings.increment_download(id).await
    }

    /// Validate itinerary day numbering and catalog references
    async fn check_itinerary(&self, itinerary: &[ItineraryDay], duration_days: i32) -> AppResult<()> {
        validate_itinerary_days(itinerary, duration_days).map_err(AppError::Validation)?;

        for entry in itinerary {
            if let Some(hotel_id) = entry.hotel_id {
                if !self.repository.hotels.exists_active(hotel_id).await? {
                    return Err(AppError::Validation(format!(
                        "Itinerary day {} references unknown hotel {}",
                        entry.day, hotel_id
                    )));
                }
            }
            if let Some(transport_id) = entry.transport_id {
                if !self.repository.transport.exists_active(transport_id).await? {
                    return Err(AppError::Validation(format!(
                        "Itinerary day {} references unknown transport {}",
                        entry.day, transport_id
                    )));
                }
            }
        }
        Ok(())
    }
}

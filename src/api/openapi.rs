//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    attractions, auth, bookings, customers, health, hotels, settings, staff, stats, submissions,
    transport,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rehla Admin API",
        version = "0.1.0",
        description = "UAE travel booking administration REST API",
        contact(name = "Rehla Team", email = "dev@rehla.travel")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Attractions
        attractions::list_attractions,
        attractions::get_attraction,
        attractions::create_attraction,
        attractions::update_attraction,
        attractions::delete_attraction,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        // Transport
        transport::list_transport,
        transport::get_transport,
        transport::create_transport,
        transport::update_transport,
        transport::delete_transport,
        // Submissions
        submissions::list_submissions,
        submissions::get_submission,
        submissions::create_submission,
        submissions::update_submission,
        submissions::update_submission_status,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::update_booking_status,
        bookings::record_download,
        // Customers
        customers::list_customers,
        // Stats
        stats::get_stats,
        // Settings
        settings::get_settings,
        settings::update_settings,
        // Staff
        staff::list_staff,
        staff::get_staff,
        staff::create_staff,
        staff::update_staff,
        staff::delete_staff,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::StaffInfo,
            // Enums
            crate::models::enums::Emirate,
            crate::models::enums::SubmissionStatus,
            crate::models::enums::BookingStatus,
            crate::models::enums::StaffRole,
            // Attractions
            crate::models::attraction::Attraction,
            crate::models::attraction::CreateAttraction,
            crate::models::attraction::UpdateAttraction,
            crate::models::attraction::AttractionQuery,
            // Hotels
            crate::models::hotel::Hotel,
            crate::models::hotel::CreateHotel,
            crate::models::hotel::UpdateHotel,
            crate::models::hotel::HotelQuery,
            // Transport
            crate::models::transport::Transport,
            crate::models::transport::CreateTransport,
            crate::models::transport::UpdateTransport,
            crate::models::transport::TransportQuery,
            // Submissions
            crate::models::submission::TravelSubmission,
            crate::models::submission::CreateSubmission,
            crate::models::submission::UpdateSubmission,
            crate::models::submission::UpdateSubmissionStatus,
            crate::models::submission::SubmissionQuery,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::ItineraryDay,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            crate::models::booking::UpdateBookingStatus,
            crate::models::booking::DownloadResponse,
            crate::models::booking::BookingQuery,
            // Customers
            crate::models::customer::CustomerSummary,
            crate::models::customer::CustomerQuery,
            // Staff
            crate::models::staff::StaffUser,
            crate::models::staff::CreateStaffUser,
            crate::models::staff::UpdateStaffUser,
            crate::models::staff::StaffQuery,
            // Stats
            stats::StatsResponse,
            stats::CatalogStats,
            stats::SubmissionStats,
            stats::BookingStats,
            stats::TimeSeriesEntry,
            // Settings
            settings::SettingsResponse,
            settings::UpdateSettingsRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "attractions", description = "Attraction catalog management"),
        (name = "hotels", description = "Hotel catalog management"),
        (name = "transport", description = "Transport catalog management"),
        (name = "submissions", description = "Customer travel submissions"),
        (name = "bookings", description = "Booking management"),
        (name = "customers", description = "Customer overview"),
        (name = "stats", description = "Dashboard statistics"),
        (name = "settings", description = "System settings"),
        (name = "staff", description = "Staff account management")
    )
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by the handler annotations
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_auth_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("document has components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}

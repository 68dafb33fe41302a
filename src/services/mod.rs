//! Business logic services

pub mod attractions;
pub mod auth;
pub mod bookings;
pub mod customers;
pub mod hotels;
pub mod settings;
pub mod stats;
pub mod submissions;
pub mod transport;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub auth: auth::AuthService,
    pub attractions: attractions::AttractionsService,
    pub hotels: hotels::HotelsService,
    pub transport: transport::TransportService,
    pub submissions: submissions::SubmissionsService,
    pub bookings: bookings::BookingsService,
    pub customers: customers::CustomersService,
    pub stats: stats::StatsService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            attractions: attractions::AttractionsService::new(repository.clone()),
            hotels: hotels::HotelsService::new(repository.clone()),
            transport: transport::TransportService::new(repository.clone()),
            submissions: submissions::SubmissionsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            customers: customers::CustomersService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            repository,
        }
    }

    /// Cheap connectivity probe for the readiness endpoint
    pub async fn db_ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }
}

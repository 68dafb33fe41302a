//! Repository layer for database operations

pub mod attractions;
pub mod bookings;
pub mod customers;
pub mod hotels;
pub mod staff;
pub mod submissions;
pub mod transport;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub attractions: attractions::AttractionsRepository,
    pub hotels: hotels::HotelsRepository,
    pub transport: transport::TransportRepository,
    pub submissions: submissions::SubmissionsRepository,
    pub bookings: bookings::BookingsRepository,
    pub customers: customers::CustomersRepository,
    pub staff: staff::StaffRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            attractions: attractions::AttractionsRepository::new(pool.clone()),
            hotels: hotels::HotelsRepository::new(pool.clone()),
            transport: transport::TransportRepository::new(pool.clone()),
            submissions: submissions::SubmissionsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            customers: customers::CustomersRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Normalize pagination parameters into (limit, offset).
///
/// Page defaults to 1, per_page to 20 and is capped at 100.
pub(crate) fn page_bounds(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(20).clamp(1, 100);
    (per_page, (page - 1) * per_page)
}

#[cfg(test)]
mod tests {
    use super::page_bounds;

    #[test]
    fn page_bounds_defaults() {
        assert_eq!(page_bounds(None, None), (20, 0));
    }

    #[test]
    fn page_bounds_offsets_by_page() {
        assert_eq!(page_bounds(Some(3), Some(10)), (10, 20));
    }

    #[test]
    fn page_bounds_clamps_inputs() {
        assert_eq!(page_bounds(Some(0), Some(500)), (100, 0));
        assert_eq!(page_bounds(Some(-2), Some(0)), (1, 0));
    }
}

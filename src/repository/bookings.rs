//! Bookings repository

use chrono::Utc;
use sqlx::{types::Json, Pool, Postgres, Row};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingQuery, ItineraryDay},
        enums::BookingStatus,
    },
};

/// Field set for inserting a booking, assembled by the bookings service
/// (either from the request alone or merged with a source submission).
#[derive(Debug)]
pub struct NewBooking {
    pub submission_id: Option<i32>,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub duration_days: i32,
    pub travel_month: Option<String>,
    pub emirates: Vec<String>,
    pub budget: Option<rust_decimal::Decimal>,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub total_travelers: i32,
    pub itinerary: Vec<ItineraryDay>,
}

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List bookings with filters and pagination
    pub async fn list(&self, query: &BookingQuery) -> AppResult<(Vec<Booking>, i64)> {
        let mut conditions = vec!["TRUE".to_string()];
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!(
                "(customer_name ILIKE ${} OR email ILIKE ${} OR phone ILIKE ${})",
                idx, idx, idx
            ));
            idx += 1;
        }

        let where_clause = conditions.join(" AND ");

        let count_sql = format!("SELECT COUNT(*) FROM bookings WHERE {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(status) = query.status {
            count_query = count_query.bind(status);
        }
        if let Some(ref search) = query.search {
            count_query = count_query.bind(format!("%{}%", search));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let (limit, offset) = page_bounds(query.page, query.per_page);
        let list_sql = format!(
            "SELECT * FROM bookings WHERE {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );
        let mut list_query = sqlx::query_as::<_, Booking>(&list_sql);
        if let Some(status) = query.status {
            list_query = list_query.bind(status);
        }
        if let Some(ref search) = query.search {
            list_query = list_query.bind(format!("%{}%", search));
        }
        let rows = list_query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Create a booking
    pub async fn create(&self, data: &NewBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (submission_id, customer_name, email, phone, duration_days, travel_month,
                 emirates, budget, adults, children, infants, total_travelers,
                 itinerary, status, download_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'pending', 0)
            RETURNING *
            "#,
        )
        .bind(data.submission_id)
        .bind(&data.customer_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.duration_days)
        .bind(&data.travel_month)
        .bind(&data.emirates)
        .bind(data.budget)
        .bind(data.adults)
        .bind(data.children)
        .bind(data.infants)
        .bind(data.total_travelers)
        .bind(Json(&data.itinerary))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist a merged booking record (partial updates are merged by the
    /// bookings service, which also revalidates the itinerary).
    pub async fn update(&self, merged: &Booking) -> AppResult<Booking> {
        let now = Utc::now();
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                customer_name = $1, email = $2, phone = $3, duration_days = $4,
                travel_month = $5, emirates = $6, budget = $7,
                adults = $8, children = $9, infants = $10, total_travelers = $11,
                itinerary = $12, updated_at = $13
            WHERE id = $14
            RETURNING *
            "#,
        )
        .bind(&merged.customer_name)
        .bind(&merged.email)
        .bind(&merged.phone)
        .bind(merged.duration_days)
        .bind(&merged.travel_month)
        .bind(&merged.emirates)
        .bind(merged.budget)
        .bind(merged.adults)
        .bind(merged.children)
        .bind(merged.infants)
        .bind(merged.total_travelers)
        .bind(&merged.itinerary)
        .bind(now)
        .bind(merged.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", merged.id)))
    }

    /// Set a booking's workflow status
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        let now = Utc::now();
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Increment the itinerary download counter, returning the new count
    pub async fn increment_download(&self, id: i32) -> AppResult<i32> {
        let row = sqlx::query(
            r#"
            UPDATE bookings
            SET download_count = download_count + 1, updated_at = $1
            WHERE id = $2
            RETURNING download_count
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        Ok(row.get("download_count"))
    }
}

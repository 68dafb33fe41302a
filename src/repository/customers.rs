//! Customers repository
//!
//! Customers are derived rows: submissions and bookings grouped by email.

use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::AppResult,
    models::customer::{CustomerQuery, CustomerSummary},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List per-email customer aggregates, most recently active first
    pub async fn list(&self, query: &CustomerQuery) -> AppResult<(Vec<CustomerSummary>, i64)> {
        let search = query.search.as_ref().map(|s| format!("%{}%", s));
        let (limit, offset) = page_bounds(query.page, query.per_page);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT email) FROM (
                SELECT email, customer_name FROM travel_submissions
                UNION ALL
                SELECT email, customer_name FROM bookings
            ) activity
            WHERE $1::text IS NULL OR email ILIKE $1 OR customer_name ILIKE $1
            "#,
        )
        .bind(&search)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, CustomerSummary>(
            r#"
            SELECT
                email,
                (array_agg(customer_name ORDER BY created_at DESC))[1] AS customer_name,
                (array_agg(phone ORDER BY created_at DESC))[1] AS phone,
                SUM(is_submission)::bigint AS submission_count,
                SUM(is_booking)::bigint AS booking_count,
                MAX(created_at) AS last_activity
            FROM (
                SELECT email, customer_name, phone, created_at,
                       1 AS is_submission, 0 AS is_booking
                FROM travel_submissions
                UNION ALL
                SELECT email, customer_name, phone, created_at,
                       0 AS is_submission, 1 AS is_booking
                FROM bookings
            ) activity
            WHERE $1::text IS NULL OR email ILIKE $1 OR customer_name ILIKE $1
            GROUP BY email
            ORDER BY last_activity DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }
}

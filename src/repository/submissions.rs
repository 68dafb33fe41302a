//! Travel submissions repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::SubmissionStatus,
        submission::{CreateSubmission, SubmissionQuery, TravelSubmission},
    },
};

#[derive(Clone)]
pub struct SubmissionsRepository {
    pool: Pool<Postgres>,
}

impl SubmissionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List submissions with filters and pagination
    pub async fn list(&self, query: &SubmissionQuery) -> AppResult<(Vec<TravelSubmission>, i64)> {
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

        let count_sql = format!("SELECT COUNT(*) FROM travel_submissions WHERE {}", where_clause);
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
            "SELECT * FROM travel_submissions WHERE {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );
        let mut list_query = sqlx::query_as::<_, TravelSubmission>(&list_sql);
        if let Some(status) = query.status {
            list_query = list_query.bind(status);
        }
        if let Some(ref search) = query.search {
            list_query = list_query.bind(format!("%{}%", search));
        }
        let rows = list_query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get a submission by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<TravelSubmission> {
        sqlx::query_as::<_, TravelSubmission>("SELECT * FROM travel_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", id)))
    }

    /// Create a submission with a server-computed traveler total
    pub async fn create(&self, data: &CreateSubmission, total_travelers: i32) -> AppResult<TravelSubmission> {
        let row = sqlx::query_as::<_, TravelSubmission>(
            r#"
            INSERT INTO travel_submissions
                (customer_name, email, phone, duration_days, travel_month, emirates,
                 budget, adults, children, infants, total_travelers, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'pending')
            RETURNING *
            "#,
        )
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
        .bind(total_travelers)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist a merged submission record. The service layer merges partial
    /// updates onto the stored row and recomputes total_travelers first.
    pub async fn update(&self, merged: &TravelSubmission) -> AppResult<TravelSubmission> {
        let now = Utc::now();
        sqlx::query_as::<_, TravelSubmission>(
            r#"
            UPDATE travel_submissions SET
                customer_name = $1, email = $2, phone = $3, duration_days = $4,
                travel_month = $5, emirates = $6, budget = $7,
                adults = $8, children = $9, infants = $10, total_travelers = $11,
                updated_at = $12
            WHERE id = $13
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
        .bind(now)
        .bind(merged.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", merged.id)))
    }

    /// Set a submission's workflow status
    pub async fn update_status(&self, id: i32, status: SubmissionStatus) -> AppResult<TravelSubmission> {
        let now = Utc::now();
        sqlx::query_as::<_, TravelSubmission>(
            "UPDATE travel_submissions SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", id)))
    }
}

//! Transport repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::transport::{CreateTransport, Transport, TransportQuery, UpdateTransport},
};

#[derive(Clone)]
pub struct TransportRepository {
    pool: Pool<Postgres>,
}

impl TransportRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active transport options with filters and pagination
    pub async fn list(&self, query: &TransportQuery) -> AppResult<(Vec<Transport>, i64)> {
        let mut conditions = vec!["deleted_at IS NULL".to_string()];
        let mut idx = 1;

        if query.transport_type.is_some() {
            conditions.push(format!("LOWER(transport_type) = LOWER(${})", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!("(label ILIKE ${} OR description ILIKE ${})", idx, idx));
            idx += 1;
        }

        let where_clause = conditions.join(" AND ");

        let count_sql = format!("SELECT COUNT(*) FROM transport WHERE {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(ref transport_type) = query.transport_type {
            count_query = count_query.bind(transport_type);
        }
        if let Some(ref search) = query.search {
            count_query = count_query.bind(format!("%{}%", search));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let (limit, offset) = page_bounds(query.page, query.per_page);
        let list_sql = format!(
            "SELECT * FROM transport WHERE {} ORDER BY label LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );
        let mut list_query = sqlx::query_as::<_, Transport>(&list_sql);
        if let Some(ref transport_type) = query.transport_type {
            list_query = list_query.bind(transport_type);
        }
        if let Some(ref search) = query.search {
            list_query = list_query.bind(format!("%{}%", search));
        }
        let rows = list_query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get an active transport option by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Transport> {
        sqlx::query_as::<_, Transport>(
            "SELECT * FROM transport WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transport {} not found", id)))
    }

    /// Create a transport option
    pub async fn create(&self, data: &CreateTransport) -> AppResult<Transport> {
        let row = sqlx::query_as::<_, Transport>(
            r#"
            INSERT INTO transport (label, transport_type, cost_per_day, description, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.label)
        .bind(&data.transport_type)
        .bind(data.cost_per_day)
        .bind(&data.description)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a transport option
    pub async fn update(&self, id: i32, data: &UpdateTransport) -> AppResult<Transport> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.label, "label");
        add_field!(data.transport_type, "transport_type");
        add_field!(data.cost_per_day, "cost_per_day");
        add_field!(data.description, "description");
        add_field!(data.image_url, "image_url");

        let query = format!(
            "UPDATE transport SET {} WHERE id = {} AND deleted_at IS NULL RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Transport>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.label);
        bind_field!(data.transport_type);
        bind_field!(data.cost_per_day);
        bind_field!(data.description);
        bind_field!(data.image_url);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transport {} not found", id)))
    }

    /// Soft-delete a transport option
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE transport SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Transport {} not found", id)));
        }
        Ok(())
    }

    /// Whether an active transport option with this ID exists
    pub async fn exists_active(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM transport WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Count active transport options (for stats)
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM transport WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}

//! Attractions repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
};

#[derive(Clone)]
pub struct AttractionsRepository {
    pool: Pool<Postgres>,
}

impl AttractionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active attractions with filters and pagination
    pub async fn list(&self, query: &AttractionQuery) -> AppResult<(Vec<Attraction>, i64)> {
        let mut conditions = vec!["deleted_at IS NULL".to_string()];
        let mut idx = 1;

        if query.emirate.is_some() {
            conditions.push(format!("emirate = ${}", idx));
            idx += 1;
        }
        if query.category.is_some() {
            conditions.push(format!("LOWER(category) = LOWER(${})", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!("(name ILIKE ${} OR description ILIKE ${})", idx, idx));
            idx += 1;
        }

        let where_clause = conditions.join(" AND ");

        let count_sql = format!("SELECT COUNT(*) FROM attractions WHERE {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(emirate) = query.emirate {
            count_query = count_query.bind(emirate);
        }
        if let Some(ref category) = query.category {
            count_query = count_query.bind(category);
        }
        if let Some(ref search) = query.search {
            count_query = count_query.bind(format!("%{}%", search));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let (limit, offset) = page_bounds(query.page, query.per_page);
        let list_sql = format!(
            "SELECT * FROM attractions WHERE {} ORDER BY name LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );
        let mut list_query = sqlx::query_as::<_, Attraction>(&list_sql);
        if let Some(emirate) = query.emirate {
            list_query = list_query.bind(emirate);
        }
        if let Some(ref category) = query.category {
            list_query = list_query.bind(category);
        }
        if let Some(ref search) = query.search {
            list_query = list_query.bind(format!("%{}%", search));
        }
        let rows = list_query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get an active attraction by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Attraction> {
        sqlx::query_as::<_, Attraction>(
            "SELECT * FROM attractions WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Attraction {} not found", id)))
    }

    /// Create an attraction
    pub async fn create(&self, data: &CreateAttraction) -> AppResult<Attraction> {
        let row = sqlx::query_as::<_, Attraction>(
            r#"
            INSERT INTO attractions
                (name, emirate, category, description, price, child_price, infant_price,
                 duration, rating, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.emirate)
        .bind(&data.category)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.child_price)
        .bind(data.infant_price)
        .bind(&data.duration)
        .bind(data.rating)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert an attraction unless a row with the same name and emirate is
    /// already active. Returns None when skipped. Used by the seed binary.
    pub async fn create_if_absent(&self, data: &CreateAttraction) -> AppResult<Option<Attraction>> {
        let row = sqlx::query_as::<_, Attraction>(
            r#"
            INSERT INTO attractions
                (name, emirate, category, description, price, child_price, infant_price,
                 duration, rating, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (name, emirate) WHERE deleted_at IS NULL DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.emirate)
        .bind(&data.category)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.child_price)
        .bind(data.infant_price)
        .bind(&data.duration)
        .bind(data.rating)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of an attraction
    pub async fn update(&self, id: i32, data: &UpdateAttraction) -> AppResult<Attraction> {
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

        add_field!(data.name, "name");
        add_field!(data.emirate, "emirate");
        add_field!(data.category, "category");
        add_field!(data.description, "description");
        add_field!(data.price, "price");
        add_field!(data.child_price, "child_price");
        add_field!(data.infant_price, "infant_price");
        add_field!(data.duration, "duration");
        add_field!(data.rating, "rating");
        add_field!(data.image_url, "image_url");

        let query = format!(
            "UPDATE attractions SET {} WHERE id = {} AND deleted_at IS NULL RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Attraction>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.emirate);
        bind_field!(data.category);
        bind_field!(data.description);
        bind_field!(data.price);
        bind_field!(data.child_price);
        bind_field!(data.infant_price);
        bind_field!(data.duration);
        bind_field!(data.rating);
        bind_field!(data.image_url);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attraction {} not found", id)))
    }

    /// Soft-delete an attraction
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE attractions SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attraction {} not found", id)));
        }
        Ok(())
    }

    /// Count active attractions (for stats)
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM attractions WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}

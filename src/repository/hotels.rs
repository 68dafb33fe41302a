//! Hotels repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::hotel::{CreateHotel, Hotel, HotelQuery, UpdateHotel},
};

#[derive(Clone)]
pub struct HotelsRepository {
    pool: Pool<Postgres>,
}

impl HotelsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active hotels with filters and pagination
    pub async fn list(&self, query: &HotelQuery) -> AppResult<(Vec<Hotel>, i64)> {
        let mut conditions = vec!["deleted_at IS NULL".to_string()];
        let mut idx = 1;

        if query.location.is_some() {
            conditions.push(format!("location = ${}", idx));
            idx += 1;
        }
        if query.stars.is_some() {
            conditions.push(format!("stars = ${}", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!("(name ILIKE ${} OR description ILIKE ${})", idx, idx));
            idx += 1;
        }

        let where_clause = conditions.join(" AND ");

        let count_sql = format!("SELECT COUNT(*) FROM hotels WHERE {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(location) = query.location {
            count_query = count_query.bind(location);
        }
        if let Some(stars) = query.stars {
            count_query = count_query.bind(stars);
        }
        if let Some(ref search) = query.search {
            count_query = count_query.bind(format!("%{}%", search));
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let (limit, offset) = page_bounds(query.page, query.per_page);
        let list_sql = format!(
            "SELECT * FROM hotels WHERE {} ORDER BY stars DESC, name LIMIT ${} OFFSET ${}",
            where_clause,
            idx,
            idx + 1
        );
        let mut list_query = sqlx::query_as::<_, Hotel>(&list_sql);
        if let Some(location) = query.location {
            list_query = list_query.bind(location);
        }
        if let Some(stars) = query.stars {
            list_query = list_query.bind(stars);
        }
        if let Some(ref search) = query.search {
            list_query = list_query.bind(format!("%{}%", search));
        }
        let rows = list_query.bind(limit).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get an active hotel by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", id)))
    }

    /// Create a hotel
    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        let row = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels
                (name, stars, category, location, price_min, price_max, amenities,
                 description, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.stars)
        .bind(&data.category)
        .bind(data.location)
        .bind(data.price_min)
        .bind(data.price_max)
        .bind(&data.amenities)
        .bind(&data.description)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a hotel
    pub async fn update(&self, id: i32, data: &UpdateHotel) -> AppResult<Hotel> {
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
        add_field!(data.stars, "stars");
        add_field!(data.category, "category");
        add_field!(data.location, "location");
        add_field!(data.price_min, "price_min");
        add_field!(data.price_max, "price_max");
        add_field!(data.amenities, "amenities");
        add_field!(data.description, "description");
        add_field!(data.image_url, "image_url");

        let query = format!(
            "UPDATE hotels SET {} WHERE id = {} AND deleted_at IS NULL RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Hotel>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.stars);
        bind_field!(data.category);
        bind_field!(data.location);
        bind_field!(data.price_min);
        bind_field!(data.price_max);
        bind_field!(data.amenities);
        bind_field!(data.description);
        bind_field!(data.image_url);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", id)))
    }

    /// Soft-delete a hotel
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE hotels SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Hotel {} not found", id)));
        }
        Ok(())
    }

    /// Whether an active hotel with this ID exists (itinerary reference check)
    pub async fn exists_active(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM hotels WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Count active hotels (for stats)
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels WHERE deleted_at IS NULL")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

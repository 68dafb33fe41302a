//! Staff accounts repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::page_bounds;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::StaffRole,
        staff::{StaffQuery, StaffUser},
    },
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active staff accounts
    pub async fn list(&self, query: &StaffQuery) -> AppResult<(Vec<StaffUser>, i64)> {
        let search = query.search.as_ref().map(|s| format!("%{}%", s));
        let (limit, offset) = page_bounds(query.page, query.per_page);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM staff_users
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR username ILIKE $1 OR display_name ILIKE $1 OR email ILIKE $1)
            "#,
        )
        .bind(&search)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, StaffUser>(
            r#"
            SELECT * FROM staff_users
            WHERE deleted_at IS NULL
              AND ($1::text IS NULL OR username ILIKE $1 OR display_name ILIKE $1 OR email ILIKE $1)
            ORDER BY username
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

    /// Get an active staff account by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<StaffUser> {
        sqlx::query_as::<_, StaffUser>(
            "SELECT * FROM staff_users WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff account {} not found", id)))
    }

    /// Get an active staff account by username (for login)
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<StaffUser>> {
        let row = sqlx::query_as::<_, StaffUser>(
            "SELECT * FROM staff_users WHERE username = $1 AND deleted_at IS NULL",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Create a staff account with an already-hashed password
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        role: StaffRole,
    ) -> AppResult<StaffUser> {
        let row = sqlx::query_as::<_, StaffUser>(
            r#"
            INSERT INTO staff_users (username, password_hash, display_name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(display_name)
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Username {} already exists", username))
            }
            _ => AppError::Database(e),
        })?;
        Ok(row)
    }

    /// Partial update of a staff account. The password, if present, arrives
    /// hashed from the auth service.
    pub async fn update(
        &self,
        id: i32,
        password_hash: Option<&str>,
        display_name: Option<&str>,
        email: Option<&str>,
        role: Option<StaffRole>,
    ) -> AppResult<StaffUser> {
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

        add_field!(password_hash, "password_hash");
        add_field!(display_name, "display_name");
        add_field!(email, "email");
        add_field!(role, "role");

        let query = format!(
            "UPDATE staff_users SET {} WHERE id = {} AND deleted_at IS NULL RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, StaffUser>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(password_hash);
        bind_field!(display_name);
        bind_field!(email);
        bind_field!(role);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff account {} not found", id)))
    }

    /// Soft-delete a staff account
    pub async fn soft_delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE staff_users SET deleted_at = $1, updated_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff account {} not found", id)));
        }
        Ok(())
    }
}

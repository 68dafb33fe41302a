//! Authentication and staff account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        staff::{CreateStaffUser, StaffClaims, StaffQuery, StaffUser, UpdateStaffUser},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Verify credentials and issue a JWT
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, StaffUser)> {
        let staff = self
            .repository
            .staff
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        let parsed_hash = PasswordHash::new(&staff.password_hash)
            .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Authentication("Invalid username or password".to_string()))?;

        let now = Utc::now();
        let claims = StaffClaims {
            sub: staff.username.clone(),
            staff_id: staff.id,
            role: staff.role,
            iat: now.timestamp(),
            exp: now.timestamp() + (self.config.jwt_expiration_hours as i64) * 3600,
        };
        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, staff))
    }

    /// Load the staff profile behind a set of claims
    pub async fn me(&self, claims: &StaffClaims) -> AppResult<StaffUser> {
        self.repository.staff.get_by_id(claims.staff_id).await
    }

    pub async fn list_staff(&self, query: &StaffQuery) -> AppResult<(Vec<StaffUser>, i64)> {
        self.repository.staff.list(query).await
    }

    pub async fn get_staff(&self, id: i32) -> AppResult<StaffUser> {
        self.repository.staff.get_by_id(id).await
    }

    pub async fn create_staff(&self, data: &CreateStaffUser) -> AppResult<StaffUser> {
        data.validate()?;
        let password_hash = hash_password(&data.password)?;
        self.repository
            .staff
            .create(
                &data.username,
                &password_hash,
                data.display_name.as_deref(),
                data.email.as_deref(),
                data.role,
            )
            .await
    }

    pub async fn update_staff(&self, id: i32, data: &UpdateStaffUser) -> AppResult<StaffUser> {
        data.validate()?;
        let password_hash = match &data.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        self.repository
            .staff
            .update(
                id,
                password_hash.as_deref(),
                data.display_name.as_deref(),
                data.email.as_deref(),
                data.role,
            )
            .await
    }

    /// Soft-delete a staff account. Deleting your own account is rejected.
    pub async fn delete_staff(&self, id: i32, acting: &StaffClaims) -> AppResult<()> {
        if id == acting.staff_id {
            return Err(AppError::BusinessRule(
                "Cannot delete your own account".to_string(),
            ));
        }
        self.repository.staff.soft_delete(id).await
    }
}

/// Hash a password with argon2 and a fresh salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

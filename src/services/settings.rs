//! System settings service
//!
//! Settings are key/value rows assembled into a single document; missing
//! keys fall back to defaults.

use std::collections::HashMap;

use sqlx::Row;

use crate::{
    api::settings::{SettingsResponse, UpdateSettingsRequest},
    error::AppResult,
    repository::Repository,
};

const KEY_AGENCY_NAME: &str = "agency_name";
const KEY_CONTACT_EMAIL: &str = "contact_email";
const KEY_CONTACT_PHONE: &str = "contact_phone";
const KEY_WHATSAPP_NUMBER: &str = "whatsapp_number";
const KEY_DEFAULT_CURRENCY: &str = "default_currency";

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get current settings
    pub async fn get_settings(&self) -> AppResult<SettingsResponse> {
        let pool = &self.repository.pool;

        let mut values: HashMap<String, String> =
            sqlx::query("SELECT key, value FROM system_settings")
                .fetch_all(pool)
                .await?
                .into_iter()
                .map(|row| (row.get("key"), row.get("value")))
                .collect();

        Ok(SettingsResponse {
            agency_name: values
                .remove(KEY_AGENCY_NAME)
                .unwrap_or_else(|| "Rehla Travel".to_string()),
            contact_email: values.remove(KEY_CONTACT_EMAIL).unwrap_or_default(),
            contact_phone: values.remove(KEY_CONTACT_PHONE).unwrap_or_default(),
            whatsapp_number: values.remove(KEY_WHATSAPP_NUMBER),
            default_currency: values
                .remove(KEY_DEFAULT_CURRENCY)
                .unwrap_or_else(|| "AED".to_string()),
        })
    }

    /// Upsert the provided settings keys, then return the full document
    pub async fn update_settings(&self, request: UpdateSettingsRequest) -> AppResult<SettingsResponse> {
        let updates = [
            (KEY_AGENCY_NAME, request.agency_name),
            (KEY_CONTACT_EMAIL, request.contact_email),
            (KEY_CONTACT_PHONE, request.contact_phone),
            (KEY_WHATSAPP_NUMBER, request.whatsapp_number),
            (KEY_DEFAULT_CURRENCY, request.default_currency),
        ];

        for (key, value) in updates {
            if let Some(value) = value {
                sqlx::query(
                    r#"
                    INSERT INTO system_settings (key, value)
                    VALUES ($1, $2)
                    ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
                    "#,
                )
                .bind(key)
                .bind(&value)
                .execute(&self.repository.pool)
                .await?;
            }
        }

        self.get_settings().await
    }
}

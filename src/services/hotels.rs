//! Hotels service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::hotel::{CreateHotel, Hotel, HotelQuery, UpdateHotel},
    repository::Repository,
};

#[derive(Clone)]
pub struct HotelsService {
    repository: Repository,
}

impl HotelsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &HotelQuery) -> AppResult<(Vec<Hotel>, i64)> {
        self.repository.hotels.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Hotel> {
        self.repository.hotels.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        data.validate()?;
        if data.price_min > data.price_max {
            return Err(AppError::Validation(
                "price_min cannot exceed price_max".to_string(),
            ));
        }
        self.repository.hotels.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateHotel) -> AppResult<Hotel> {
        data.validate()?;
        // Range check against stored values when only one bound changes
        if data.price_min.is_some() || data.price_max.is_some() {
            let current = self.repository.hotels.get_by_id(id).await?;
            let min = data.price_min.unwrap_or(current.price_min);
            let max = data.price_max.unwrap_or(current.price_max);
            if min > max {
                return Err(AppError::Validation(
                    "price_min cannot exceed price_max".to_string(),
                ));
            }
        }
        self.repository.hotels.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.hotels.soft_delete(id).await
    }
}

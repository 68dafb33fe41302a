//! Attractions service

use validator::Validate;

use crate::{
    error::AppResult,
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
    repository::Repository,
};

#[derive(Clone)]
pub struct AttractionsService {
    repository: Repository,
}

impl AttractionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AttractionQuery) -> AppResult<(Vec<Attraction>, i64)> {
        self.repository.attractions.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Attraction> {
        self.repository.attractions.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAttraction) -> AppResult<Attraction> {
        data.validate()?;
        self.repository.attractions.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateAttraction) -> AppResult<Attraction> {
        data.validate()?;
        self.repository.attractions.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.attractions.soft_delete(id).await
    }
}

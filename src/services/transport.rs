//! Transport service

use validator::Validate;

use crate::{
    error::AppResult,
    models::transport::{CreateTransport, Transport, TransportQuery, UpdateTransport},
    repository::Repository,
};

#[derive(Clone)]
pub struct TransportService {
    repository: Repository,
}

impl TransportService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &TransportQuery) -> AppResult<(Vec<Transport>, i64)> {
        self.repository.transport.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Transport> {
        self.repository.transport.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTransport) -> AppResult<Transport> {
        data.validate()?;
        self.repository.transport.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTransport) -> AppResult<Transport> {
        data.validate()?;
        self.repository.transport.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.transport.soft_delete(id).await
    }
}

//! Customers service

use crate::{
    error::AppResult,
    models::customer::{CustomerQuery, CustomerSummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct CustomersService {
    repository: Repository,
}

impl CustomersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &CustomerQuery) -> AppResult<(Vec<CustomerSummary>, i64)> {
        self.repository.customers.list(query).await
    }
}

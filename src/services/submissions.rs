//! Travel submissions service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{Emirate, SubmissionStatus},
        submission::{
            total_travelers, CreateSubmission, SubmissionQuery, TravelSubmission, UpdateSubmission,
        },
    },
    repository::Repository,
};

/// Ensure every requested emirate is a known slug
pub(crate) fn validate_emirates(emirates: &[String]) -> AppResult<()> {
    for slug in emirates {
        slug.parse::<Emirate>()
            .map_err(AppError::Validation)?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct SubmissionsService {
    repository: Repository,
}

impl SubmissionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &SubmissionQuery) -> AppResult<(Vec<TravelSubmission>, i64)> {
        self.repository.submissions.list(query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TravelSubmission> {
        self.repository.submissions.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateSubmission) -> AppResult<TravelSubmission> {
        data.validate()?;
        validate_emirates(&data.emirates)?;
        let total = total_travelers(data.adults, data.children, data.infants);
        self.repository.submissions.create(data, total).await
    }

    /// Merge a partial update onto the stored submission, recomputing the
    /// traveler total, and persist the result.
    pub async fn update(&self, id: i32, data: &UpdateSubmission) -> AppResult<TravelSubmission> {
        data.validate()?;
        if let Some(ref emirates) = data.emirates {
            validate_emirates(emirates)?;
        }

        let mut merged = self.repository.submissions.get_by_id(id).await?;
        if merged.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Submission {} is {} and cannot be modified",
                id, merged.status
            )));
        }

        if let Some(ref v) = data.customer_name {
            merged.customer_name = v.clone();
        }
        if let Some(ref v) = data.email {
            merged.email = v.clone();
        }
        if data.phone.is_some() {
            merged.phone = data.phone.clone();
        }
        if let Some(v) = data.duration_days {
            merged.duration_days = v;
        }
        if data.travel_month.is_some() {
            merged.travel_month = data.travel_month.clone();
        }
        if let Some(ref v) = data.emirates {
            merged.emirates = v.clone();
        }
        if data.budget.is_some() {
            merged.budget = data.budget;
        }
        if let Some(v) = data.adults {
            merged.adults = v;
        }
        if let Some(v) = data.children {
            merged.children = v;
        }
        if let Some(v) = data.infants {
            merged.infants = v;
        }
        merged.total_travelers = total_travelers(merged.adults, merged.children, merged.infants);

        self.repository.submissions.update(&merged).await
    }

    /// Transition a submission's workflow status. Completed and cancelled
    /// submissions are frozen.
    pub async fn update_status(
        &self,
        id: i32,
        status: SubmissionStatus,
    ) -> AppResult<TravelSubmission> {
        let current = self.repository.submissions.get_by_id(id).await?;
        if current.status.is_terminal() {
            return Err(AppError::BusinessRule(format!(
                "Submission {} is {} and cannot change status",
                id, current.status
            )));
        }
        if current.status == status {
            return Ok(current);
        }
        self.repository.submissions.update_status(id, status).await
    }
}

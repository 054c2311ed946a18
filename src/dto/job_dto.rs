use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::job::{Job, DEFAULT_CATEGORY, DEFAULT_JOB_TYPE, DEFAULT_SALARY};
use crate::utils::validation::blank_to_none;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateJobPayload {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 200, message = "must be 1 to 200 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub company: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub location: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub salary: Option<String>,
    /// Full-time, Part-time, Remote or Contract.
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub job_type: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "is required"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub is_active: Option<bool>,
}

impl CreateJobPayload {
    pub fn salary_or_default(&self) -> String {
        or_default(self.salary.as_deref(), DEFAULT_SALARY)
    }

    pub fn job_type_or_default(&self) -> String {
        or_default(self.job_type.as_deref(), DEFAULT_JOB_TYPE)
    }

    pub fn category_or_default(&self) -> String {
        or_default(self.category.as_deref(), DEFAULT_CATEGORY)
    }

    pub fn requirements(&self) -> Option<String> {
        blank_to_none(self.requirements.as_deref())
    }

    pub fn benefits(&self) -> Option<String> {
        blank_to_none(self.benefits.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// Partial update: `None` leaves the stored value as it is. Blank optional
/// values are normalised the same way as on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateJobPayload {
    #[validate(
        length(min = 1, max = 200, message = "must be 1 to 200 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub title: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub company: Option<String>,
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub location: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub salary: Option<String>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub job_type: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub category: Option<String>,
    #[validate(
        length(min = 1, message = "is required"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateJobPayload {
    pub fn salary(&self) -> Option<String> {
        self.salary
            .as_deref()
            .map(|v| or_default(Some(v), DEFAULT_SALARY))
    }

    pub fn job_type(&self) -> Option<String> {
        self.job_type
            .as_deref()
            .map(|v| or_default(Some(v), DEFAULT_JOB_TYPE))
    }

    pub fn category(&self) -> Option<String> {
        self.category
            .as_deref()
            .map(|v| or_default(Some(v), DEFAULT_CATEGORY))
    }

    /// Outer `None`: keep. `Some(None)`: clear.
    pub fn requirements(&self) -> Option<Option<String>> {
        self.requirements.as_deref().map(|v| blank_to_none(Some(v)))
    }

    pub fn benefits(&self) -> Option<Option<String>> {
        self.benefits.as_deref().map(|v| blank_to_none(Some(v)))
    }

    pub fn apply_to(&self, job: &mut Job) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(company) = &self.company {
            job.company = company.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(salary) = self.salary() {
            job.salary = salary;
        }
        if let Some(job_type) = self.job_type() {
            job.job_type = job_type;
        }
        if let Some(category) = self.category() {
            job.category = category;
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(requirements) = self.requirements() {
            job.requirements = requirements;
        }
        if let Some(benefits) = self.benefits() {
            job.benefits = benefits;
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    blank_to_none(value).unwrap_or_else(|| default.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
    pub category: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub posted_date: DateTime<Utc>,
    pub is_active: bool,
    pub application_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            location: value.location,
            salary: value.salary,
            job_type: value.job_type,
            category: value.category,
            description: value.description,
            requirements: value.requirements,
            benefits: value.benefits,
            posted_date: value.posted_date,
            is_active: value.is_active,
            application_count: value.application_count,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, ApplicationWithJob};
use crate::utils::validation::blank_to_none;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationPayload {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "must be 1 to 100 characters"),
        custom(function = "crate::utils::validation::validate_email_shape")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 20, message = "must be 1 to 20 characters"),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub phone: String,
    /// Link to a resume hosted elsewhere.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    /// Years of experience.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub experience: Option<i32>,
    /// Free text, usually comma separated.
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub skills: Option<String>,
}

impl CreateApplicationPayload {
    pub fn resume_url(&self) -> Option<String> {
        blank_to_none(self.resume_url.as_deref())
    }

    pub fn cover_letter(&self) -> Option<String> {
        blank_to_none(self.cover_letter.as_deref())
    }

    pub fn skills(&self) -> Option<String> {
        blank_to_none(self.skills.as_deref())
    }

    pub fn experience(&self) -> i32 {
        self.experience.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusPayload {
    #[serde(default)]
    pub status: String,
}

impl UpdateApplicationStatusPayload {
    pub fn parse_status(&self) -> Result<ApplicationStatus> {
        self.status.parse().map_err(|_| {
            let allowed: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
            Error::BadRequest(format!(
                "Invalid status '{}'. Allowed: {}",
                self.status,
                allowed.join(", ")
            ))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponse {
    pub id: i64,
    pub job_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub experience: i32,
    pub skills: Option<String>,
    pub applied_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationListItem {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub job_company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub experience: i32,
    pub skills: Option<String>,
    pub applied_date: DateTime<Utc>,
    pub status: String,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            resume_url: value.resume_url,
            cover_letter: value.cover_letter,
            experience: value.experience,
            skills: value.skills,
            applied_date: value.applied_date,
            status: value.status,
        }
    }
}

impl From<ApplicationWithJob> for ApplicationListItem {
    fn from(value: ApplicationWithJob) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            job_title: value.job_title,
            job_company: value.job_company,
            name: value.name,
            email: value.email,
            phone: value.phone,
            resume_url: value.resume_url,
            cover_letter: value.cover_letter,
            experience: value.experience,
            skills: value.skills,
            applied_date: value.applied_date,
            status: value.status,
        }
    }
}

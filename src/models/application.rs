use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Application {
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

/// An application joined with the title and company of its job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ApplicationWithJob {
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid application status '{0}'")]
pub struct InvalidStatus(pub String);

impl FromStr for ApplicationStatus {
    type Err = InvalidStatus;

    // Exact match only; "pending" is not a stored status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_SALARY: &str = "Negotiable";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const DEFAULT_CATEGORY: &str = "IT";

/// A posted position. `application_count` is not a column; every query
/// projects it from the live `applications` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
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

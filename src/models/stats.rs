use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BoardStats {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub pending: i64,
    pub reviewed: i64,
    pub shortlisted: i64,
    pub rejected: i64,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::stats::BoardStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusBreakdown {
    pub pending: i64,
    pub reviewed: i64,
    pub shortlisted: i64,
    pub rejected: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub applications_by_status: StatusBreakdown,
}

impl From<BoardStats> for StatsResponse {
    fn from(value: BoardStats) -> Self {
        Self {
            total_jobs: value.total_jobs,
            active_jobs: value.active_jobs,
            total_applications: value.total_applications,
            applications_by_status: StatusBreakdown {
                pending: value.pending,
                reviewed: value.reviewed,
                shortlisted: value.shortlisted,
                rejected: value.rejected,
            },
        }
    }
}

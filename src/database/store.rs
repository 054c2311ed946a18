use async_trait::async_trait;

use crate::dto::application_dto::CreateApplicationPayload;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus, ApplicationWithJob};
use crate::models::job::Job;
use crate::models::stats::BoardStats;

/// Storage for jobs and their applications.
///
/// Implementations own referential integrity: deleting a job removes its
/// applications, and `create_application` checks the parent job inside the
/// same write. Payloads arrive already validated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoardStore: Send + Sync {
    /// Jobs ordered newest first; `active_only` hides inactive postings.
    async fn list_jobs(&self, active_only: bool) -> Result<Vec<Job>>;

    async fn get_job(&self, id: i64) -> Result<Option<Job>>;

    async fn create_job(&self, payload: &CreateJobPayload) -> Result<Job>;

    /// `Ok(None)` when no job has this id.
    async fn update_job(&self, id: i64, patch: &UpdateJobPayload) -> Result<Option<Job>>;

    /// Returns whether a job was removed.
    async fn delete_job(&self, id: i64) -> Result<bool>;

    /// Fails with `NotFound` for an unknown job and `BadRequest` for an
    /// inactive one; nothing is written in either case.
    async fn create_application(
        &self,
        job_id: i64,
        payload: &CreateApplicationPayload,
    ) -> Result<Application>;

    async fn list_applications(&self) -> Result<Vec<ApplicationWithJob>>;

    async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<Application>>;

    async fn stats(&self) -> Result<BoardStats>;
}

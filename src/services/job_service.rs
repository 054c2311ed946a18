use std::sync::Arc;

use validator::Validate;

use crate::database::store::JobBoardStore;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobBoardStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobBoardStore>) -> Self {
        Self { store }
    }

    pub async fn list_active(&self) -> Result<Vec<Job>> {
        self.store.list_jobs(true).await
    }

    pub async fn list_all(&self) -> Result<Vec<Job>> {
        self.store.list_jobs(false).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Job> {
        self.store
            .get_job(id)
            .await?
            .ok_or_else(|| job_not_found(id))
    }

    pub async fn create(&self, payload: CreateJobPayload) -> Result<Job> {
        payload.validate()?;
        let job = self.store.create_job(&payload).await?;
        tracing::info!(job_id = job.id, title = %job.title, "job created");
        Ok(job)
    }

    pub async fn update(&self, id: i64, payload: UpdateJobPayload) -> Result<Job> {
        payload.validate()?;
        let job = self
            .store
            .update_job(id, &payload)
            .await?
            .ok_or_else(|| job_not_found(id))?;
        tracing::info!(job_id = job.id, "job updated");
        Ok(job)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete_job(id).await? {
            return Err(job_not_found(id));
        }
        tracing::info!(job_id = id, "job deleted with its applications");
        Ok(())
    }
}

fn job_not_found(id: i64) -> Error {
    Error::NotFound(format!("Job {} not found", id))
}

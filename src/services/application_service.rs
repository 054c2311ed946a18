use std::sync::Arc;

use validator::Validate;

use crate::database::store::JobBoardStore;
use crate::dto::application_dto::{CreateApplicationPayload, UpdateApplicationStatusPayload};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationWithJob};

#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn JobBoardStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn JobBoardStore>) -> Self {
        Self { store }
    }

    /// Public submission. The store rejects unknown and inactive jobs.
    pub async fn submit(
        &self,
        job_id: i64,
        payload: CreateApplicationPayload,
    ) -> Result<Application> {
        payload.validate()?;
        let application = self.store.create_application(job_id, &payload).await?;
        tracing::info!(
            application_id = application.id,
            job_id,
            "application submitted"
        );
        Ok(application)
    }

    pub async fn list(&self) -> Result<Vec<ApplicationWithJob>> {
        self.store.list_applications().await
    }

    pub async fn update_status(
        &self,
        id: i64,
        payload: UpdateApplicationStatusPayload,
    ) -> Result<Application> {
        let status = payload.parse_status()?;
        let application = self
            .store
            .update_application_status(id, status)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {} not found", id)))?;
        tracing::info!(application_id = id, %status, "application status changed");
        Ok(application)
    }
}

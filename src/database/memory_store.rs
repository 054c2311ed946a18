use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::store::JobBoardStore;
use crate::dto::application_dto::CreateApplicationPayload;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, ApplicationWithJob};
use crate::models::job::Job;
use crate::models::stats::BoardStats;
use crate::utils::time;

/// Non-persistent store with the same semantics as [`PgStore`](super::PgStore).
/// Used when no database is configured, and by tests.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    jobs: BTreeMap<i64, Job>,
    applications: BTreeMap<i64, Application>,
    last_job_id: i64,
    last_application_id: i64,
}

impl Tables {
    fn application_count(&self, job_id: i64) -> i64 {
        self.applications
            .values()
            .filter(|a| a.job_id == job_id)
            .count() as i64
    }

    fn with_count(&self, job: &Job) -> Job {
        Job {
            application_count: self.application_count(job.id),
            ..job.clone()
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn list_jobs(&self, active_only: bool) -> Result<Vec<Job>> {
        let tables = self.tables.read().await;
        let mut jobs: Vec<Job> = tables
            .jobs
            .values()
            .filter(|job| !active_only || job.is_active)
            .map(|job| tables.with_count(job))
            .collect();
        jobs.sort_by(|a, b| {
            b.posted_date
                .cmp(&a.posted_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(jobs)
    }

    async fn get_job(&self, id: i64) -> Result<Option<Job>> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.get(&id).map(|job| tables.with_count(job)))
    }

    async fn create_job(&self, payload: &CreateJobPayload) -> Result<Job> {
        let mut tables = self.tables.write().await;
        tables.last_job_id += 1;
        let job = Job {
            id: tables.last_job_id,
            title: payload.title.clone(),
            company: payload.company.clone(),
            location: payload.location.clone(),
            salary: payload.salary_or_default(),
            job_type: payload.job_type_or_default(),
            category: payload.category_or_default(),
            description: payload.description.clone(),
            requirements: payload.requirements(),
            benefits: payload.benefits(),
            posted_date: time::now(),
            is_active: payload.is_active(),
            application_count: 0,
        };
        tables.jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn update_job(&self, id: i64, patch: &UpdateJobPayload) -> Result<Option<Job>> {
        let mut tables = self.tables.write().await;
        let Some(job) = tables.jobs.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(job);
        let updated = job.clone();
        Ok(Some(tables.with_count(&updated)))
    }

    async fn delete_job(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.jobs.remove(&id).is_none() {
            return Ok(false);
        }
        tables.applications.retain(|_, a| a.job_id != id);
        Ok(true)
    }

    async fn create_application(
        &self,
        job_id: i64,
        payload: &CreateApplicationPayload,
    ) -> Result<Application> {
        let mut tables = self.tables.write().await;
        match tables.jobs.get(&job_id) {
            None => return Err(Error::NotFound(format!("Job {} not found", job_id))),
            Some(job) if !job.is_active => {
                return Err(Error::BadRequest(
                    "Job is no longer accepting applications".to_string(),
                ))
            }
            Some(_) => {}
        }

        tables.last_application_id += 1;
        let application = Application {
            id: tables.last_application_id,
            job_id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            resume_url: payload.resume_url(),
            cover_letter: payload.cover_letter(),
            experience: payload.experience(),
            skills: payload.skills(),
            applied_date: time::now(),
            status: ApplicationStatus::Pending.as_str().to_string(),
        };
        tables
            .applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn list_applications(&self) -> Result<Vec<ApplicationWithJob>> {
        let tables = self.tables.read().await;
        let mut items: Vec<ApplicationWithJob> = tables
            .applications
            .values()
            .filter_map(|a| {
                let job = tables.jobs.get(&a.job_id)?;
                Some(ApplicationWithJob {
                    id: a.id,
                    job_id: a.job_id,
                    job_title: job.title.clone(),
                    job_company: job.company.clone(),
                    name: a.name.clone(),
                    email: a.email.clone(),
                    phone: a.phone.clone(),
                    resume_url: a.resume_url.clone(),
                    cover_letter: a.cover_letter.clone(),
                    experience: a.experience,
                    skills: a.skills.clone(),
                    applied_date: a.applied_date,
                    status: a.status.clone(),
                })
            })
            .collect();
        items.sort_by(|a, b| {
            b.applied_date
                .cmp(&a.applied_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<Application>> {
        let mut tables = self.tables.write().await;
        Ok(tables.applications.get_mut(&id).map(|a| {
            a.status = status.as_str().to_string();
            a.clone()
        }))
    }

    async fn stats(&self) -> Result<BoardStats> {
        let tables = self.tables.read().await;
        let count_status = |status: ApplicationStatus| {
            tables
                .applications
                .values()
                .filter(|a| a.status == status.as_str())
                .count() as i64
        };
        Ok(BoardStats {
            total_jobs: tables.jobs.len() as i64,
            active_jobs: tables.jobs.values().filter(|j| j.is_active).count() as i64,
            total_applications: tables.applications.len() as i64,
            pending: count_status(ApplicationStatus::Pending),
            reviewed: count_status(ApplicationStatus::Reviewed),
            shortlisted: count_status(ApplicationStatus::Shortlisted),
            rejected: count_status(ApplicationStatus::Rejected),
        })
    }
}

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::JobBoardStore;
use crate::dto::application_dto::CreateApplicationPayload;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::application::{Application, ApplicationStatus, ApplicationWithJob};
use crate::models::job::Job;
use crate::models::stats::BoardStats;
use crate::utils::time;

const JOB_SELECT: &str = r#"
    SELECT j.id, j.title, j.company, j.location, j.salary, j.job_type, j.category,
           j.description, j.requirements, j.benefits, j.posted_date, j.is_active,
           (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS application_count
    FROM jobs j
"#;

const APPLICATION_RETURNING: &str = r#"
    RETURNING id, job_id, name, email, phone, resume_url, cover_letter,
              experience, skills, applied_date, status
"#;

/// Postgres-backed store. Writes run in their own transaction, which rolls
/// back when dropped on an error path.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn list_jobs(&self, active_only: bool) -> Result<Vec<Job>> {
        let query = format!(
            "{} WHERE ($1 = FALSE OR j.is_active) ORDER BY j.posted_date DESC, j.id DESC",
            JOB_SELECT
        );
        let jobs = sqlx::query_as::<_, Job>(&query)
            .bind(active_only)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    async fn get_job(&self, id: i64) -> Result<Option<Job>> {
        let query = format!("{} WHERE j.id = $1", JOB_SELECT);
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn create_job(&self, payload: &CreateJobPayload) -> Result<Job> {
        let mut tx = self.pool.begin().await?;
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                title, company, location, salary, job_type, category,
                description, requirements, benefits, posted_date, is_active
            ) VALUES (
                $1,$2,$3,$4,$5,$6,
                $7,$8,$9,$10,$11
            )
            RETURNING
                id, title, company, location, salary, job_type, category,
                description, requirements, benefits, posted_date, is_active,
                0::BIGINT AS application_count
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.company)
        .bind(&payload.location)
        .bind(payload.salary_or_default())
        .bind(payload.job_type_or_default())
        .bind(payload.category_or_default())
        .bind(&payload.description)
        .bind(payload.requirements())
        .bind(payload.benefits())
        .bind(time::now())
        .bind(payload.is_active())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(job)
    }

    async fn update_job(&self, id: i64, patch: &UpdateJobPayload) -> Result<Option<Job>> {
        // A present but blank requirements/benefits clears the column.
        let requirements = patch.requirements();
        let benefits = patch.benefits();
        let mut tx = self.pool.begin().await?;
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                salary = COALESCE($5, salary),
                job_type = COALESCE($6, job_type),
                category = COALESCE($7, category),
                description = COALESCE($8, description),
                requirements = CASE WHEN $9 THEN $10 ELSE requirements END,
                benefits = CASE WHEN $11 THEN $12 ELSE benefits END,
                is_active = COALESCE($13, is_active)
            WHERE id = $1
            RETURNING
                id, title, company, location, salary, job_type, category,
                description, requirements, benefits, posted_date, is_active,
                (SELECT COUNT(*) FROM applications a WHERE a.job_id = jobs.id) AS application_count
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.company)
        .bind(&patch.location)
        .bind(patch.salary())
        .bind(patch.job_type())
        .bind(patch.category())
        .bind(&patch.description)
        .bind(requirements.is_some())
        .bind(requirements.flatten())
        .bind(benefits.is_some())
        .bind(benefits.flatten())
        .bind(patch.is_active)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(job)
    }

    async fn delete_job(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        // applications.job_id cascades
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(res.rows_affected() > 0)
    }

    async fn create_application(
        &self,
        job_id: i64,
        payload: &CreateApplicationPayload,
    ) -> Result<Application> {
        let mut tx = self.pool.begin().await?;

        // Row lock keeps the job from being deactivated or deleted before
        // the insert commits.
        let is_active: Option<bool> =
            sqlx::query_scalar("SELECT is_active FROM jobs WHERE id = $1 FOR SHARE")
                .bind(job_id)
                .fetch_optional(&mut *tx)
                .await?;
        match is_active {
            None => return Err(Error::NotFound(format!("Job {} not found", job_id))),
            Some(false) => {
                return Err(Error::BadRequest(
                    "Job is no longer accepting applications".to_string(),
                ))
            }
            Some(true) => {}
        }

        let query = format!(
            r#"
            INSERT INTO applications (
                job_id, name, email, phone, resume_url, cover_letter,
                experience, skills, applied_date, status
            ) VALUES (
                $1,$2,$3,$4,$5,$6,
                $7,$8,$9,$10
            )
            {}
            "#,
            APPLICATION_RETURNING
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(job_id)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(payload.resume_url())
            .bind(payload.cover_letter())
            .bind(payload.experience())
            .bind(payload.skills())
            .bind(time::now())
            .bind(ApplicationStatus::Pending.as_str())
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(application)
    }

    async fn list_applications(&self) -> Result<Vec<ApplicationWithJob>> {
        let items = sqlx::query_as::<_, ApplicationWithJob>(
            r#"
            SELECT a.id, a.job_id, j.title AS job_title, j.company AS job_company,
                   a.name, a.email, a.phone, a.resume_url, a.cover_letter,
                   a.experience, a.skills, a.applied_date, a.status
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            ORDER BY a.applied_date DESC, a.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<Option<Application>> {
        let mut tx = self.pool.begin().await?;
        let query = format!(
            "UPDATE applications SET status = $2 WHERE id = $1 {}",
            APPLICATION_RETURNING
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(application)
    }

    async fn stats(&self) -> Result<BoardStats> {
        let stats = sqlx::query_as::<_, BoardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM jobs) AS total_jobs,
                (SELECT COUNT(*) FROM jobs WHERE is_active) AS active_jobs,
                COUNT(*) AS total_applications,
                COUNT(*) FILTER (WHERE status = $1) AS pending,
                COUNT(*) FILTER (WHERE status = $2) AS reviewed,
                COUNT(*) FILTER (WHERE status = $3) AS shortlisted,
                COUNT(*) FILTER (WHERE status = $4) AS rejected
            FROM applications
            "#,
        )
        .bind(ApplicationStatus::Pending.as_str())
        .bind(ApplicationStatus::Reviewed.as_str())
        .bind(ApplicationStatus::Shortlisted.as_str())
        .bind(ApplicationStatus::Rejected.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    dto::job_dto::{CreateJobPayload, JobResponse, MessageResponse, UpdateJobPayload},
    error::Result,
    extract::{Json, Path},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Active jobs, newest first", body = [JobResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_active_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_active().await?;
    Ok(Json(
        jobs.into_iter().map(JobResponse::from).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/jobs/all",
    responses(
        (status = 200, description = "Every job, active or not", body = [JobResponse]),
        (status = 401, description = "Missing or wrong X-Admin-Password")
    )
)]
#[axum::debug_handler]
pub async fn list_all_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_all().await?;
    Ok(Json(
        jobs.into_iter().map(JobResponse::from).collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or wrong X-Admin-Password")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or wrong X-Admin-Password"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job and its applications deleted", body = MessageResponse),
        (status = 401, description = "Missing or wrong X-Admin-Password"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Job deleted")))
}

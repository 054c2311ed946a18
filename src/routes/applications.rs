use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    dto::application_dto::{
        ApplicationListItem, ApplicationResponse, CreateApplicationPayload,
        UpdateApplicationStatusPayload,
    },
    error::Result,
    extract::{Json, Path},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = CreateApplicationPayload,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 400, description = "Invalid payload or job no longer active"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_application(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(payload): Json<CreateApplicationPayload>,
) -> Result<impl IntoResponse> {
    let application = state.application_service.submit(job_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "Applications, newest first, with job title and company", body = [ApplicationListItem]),
        (status = 401, description = "Missing or wrong X-Admin-Password")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.application_service.list().await?;
    Ok(Json(
        items
            .into_iter()
            .map(ApplicationListItem::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    params(
        ("id" = i64, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = ApplicationResponse),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Missing or wrong X-Admin-Password"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    let application = state.application_service.update_status(id, payload).await?;
    Ok(Json(ApplicationResponse::from(application)))
}

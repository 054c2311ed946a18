pub mod applications;
pub mod health;
pub mod jobs;
pub mod stats;

use std::path::Path;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    dto::{
        application_dto::{
            ApplicationListItem, ApplicationResponse, CreateApplicationPayload,
            UpdateApplicationStatusPayload,
        },
        job_dto::{CreateJobPayload, JobResponse, MessageResponse, UpdateJobPayload},
        stats_dto::{StatsResponse, StatusBreakdown},
    },
    middleware::{auth::require_admin, cors::api_cors},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_active_jobs,
        jobs::list_all_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        applications::submit_application,
        applications::list_applications,
        applications::update_application_status,
        stats::get_stats,
    ),
    components(schemas(
        JobResponse,
        CreateJobPayload,
        UpdateJobPayload,
        MessageResponse,
        ApplicationResponse,
        ApplicationListItem,
        CreateApplicationPayload,
        UpdateApplicationStatusPayload,
        StatsResponse,
        StatusBreakdown,
    )),
    info(
        title = "Job Board API",
        description = "Admin endpoints require the X-Admin-Password header."
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// JSON API only. Admin routes share paths with public ones, so the gate is
/// a route layer on the admin router and only wraps those method handlers.
pub fn api_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/jobs", get(jobs::list_active_jobs))
        .route("/api/jobs/:id", get(jobs::get_job))
        .route("/api/jobs/:id/apply", post(applications::submit_application));

    let admin = Router::new()
        .route("/api/jobs", post(jobs::create_job))
        .route("/api/jobs/all", get(jobs::list_all_jobs))
        .route(
            "/api/jobs/:id",
            put(jobs::update_job).delete(jobs::delete_job),
        )
        .route("/api/applications", get(applications::list_applications))
        .route(
            "/api/applications/:id",
            put(applications::update_application_status),
        )
        .route("/api/stats", get(stats::get_stats))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    public.merge(admin).with_state(state)
}

/// Frontend pages, served from disk.
pub fn frontend_router(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/admin", ServeFile::new(static_dir.join("admin.html")))
        .fallback_service(ServeDir::new(static_dir))
}

/// The full application as served by the binary.
pub fn app(state: AppState, config: &Config) -> Router {
    api_router(state)
        .merge(frontend_router(&config.static_dir))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
}

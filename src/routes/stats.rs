use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::stats_dto::StatsResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Job and application counts", body = StatsResponse),
        (status = 401, description = "Missing or wrong X-Admin-Password")
    )
)]
#[axum::debug_handler]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.stats_service.summary().await?;
    Ok(Json(StatsResponse::from(stats)))
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::{ArtifactKind, JobStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ForgeRequest {
    /// What to build
    pub brief: String,
    /// Artifact type
    pub kind: ArtifactKind,
    /// Block until the job reaches a terminal state (or the overall
    /// deadline) instead of returning the job id immediately.
    #[serde(default)]
    pub wait: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ForgeStartResponse {
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/forge",
    request_body = ForgeRequest,
    responses(
        (status = 202, description = "Job started", body = ForgeStartResponse),
        (status = 200, description = "Terminal job outcome (wait mode)"),
        (status = 400, description = "Empty brief"),
        (status = 502, description = "Forge unreachable"),
    ),
    tag = "forge"
)]
pub async fn start_forge_job(
    State(state): State<AppState>,
    Json(payload): Json<ForgeRequest>,
) -> Result<Response, AppError> {
    if payload.brief.trim().is_empty() {
        return Err(AppError::BadRequest("brief must not be empty".to_string()));
    }

    if payload.wait {
        let outcome = state.forge.run_job(&payload.brief, payload.kind).await?;
        return Ok(Json(outcome).into_response());
    }

    let job = state.forge.start_job(&payload.brief, payload.kind).await?;
    Ok((StatusCode::ACCEPTED, Json(ForgeStartResponse { id: job.id })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/forge/{id}",
    params(
        ("id" = String, Path, description = "Forge job ID")
    ),
    responses(
        (status = 200, description = "Current job status", body = JobStatus),
        (status = 404, description = "Unknown job"),
        (status = 502, description = "Forge unreachable"),
    ),
    tag = "forge"
)]
pub async fn get_forge_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobStatus>, AppError> {
    let status = state.forge.job_status(&id).await?;
    Ok(Json(status))
}

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use boardroom_core::{AdvisorResult, OverallVerdict};
use events::{progress_channel, ProgressEvent};
use futures::Stream;
use orchestrator::OrchestratorError;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

pub const SSE_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);
const STREAM_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct OrchestrateRequest {
    pub idea: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct OrchestrateResponse {
    pub idea: String,
    pub results: Vec<AdvisorResult>,
    pub overall_verdict: OverallVerdict,
    pub total_duration_ms: u64,
}

#[utoipa::path(
    post,
    path = "/api/orchestrate",
    request_body = OrchestrateRequest,
    responses(
        (status = 200, description = "Completed advisory run", body = OrchestrateResponse),
        (status = 400, description = "Empty idea"),
    ),
    tag = "orchestrate"
)]
pub async fn orchestrate(
    State(state): State<AppState>,
    Json(payload): Json<OrchestrateRequest>,
) -> Result<Json<OrchestrateResponse>, AppError> {
    let run = state.engine.run(&payload.idea, None).await?;

    let (idea, results, overall, total_duration_ms) = run.into_parts();
    let overall_verdict = overall.ok_or_else(|| {
        AppError::Internal("run completed without an overall verdict".to_string())
    })?;

    Ok(Json(OrchestrateResponse {
        idea,
        results,
        overall_verdict,
        total_duration_ms,
    }))
}

#[utoipa::path(
    post,
    path = "/api/orchestrate/stream",
    request_body = OrchestrateRequest,
    responses(
        (status = 200, description = "SSE progress stream, terminated by the summary frame"),
        (status = 400, description = "Empty idea"),
    ),
    tag = "orchestrate"
)]
pub async fn orchestrate_stream(
    State(state): State<AppState>,
    Json(payload): Json<OrchestrateRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Validate before committing to a stream response; once the stream
    // starts the status code is already on the wire.
    if payload.idea.trim().is_empty() {
        return Err(AppError::BadRequest("idea must not be empty".to_string()));
    }

    let (tx, rx) = progress_channel(STREAM_CHANNEL_CAPACITY);
    let engine = Arc::clone(&state.engine);
    let idea = payload.idea;

    // The sender drops when this task finishes, closing the stream right
    // after the summary frame.
    tokio::spawn(async move {
        match engine.run(&idea, Some(&tx)).await {
            Ok(run) => debug!(run_id = %run.id(), "Streamed run complete"),
            Err(OrchestratorError::StreamDisconnected) => {
                debug!("Stream consumer disconnected mid-run, run abandoned");
            }
            Err(e) => error!(error = %e, "Streamed run failed"),
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| Ok(progress_frame(&event)));

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(SSE_KEEP_ALIVE_INTERVAL)
            .text("keep-alive"),
    ))
}

fn progress_frame(event: &ProgressEvent) -> Event {
    let data = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    Event::default().data(data)
}

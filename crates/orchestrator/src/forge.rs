//! Bridge to the remote artifact build service ("forge").
//!
//! The forge compiles a brief into an artifact (landing page, campaign,
//! deck, email sequence) as a long-running remote job. This module treats
//! it strictly as a black box with start/status semantics and a fixed
//! polling loop; exceeding the overall wait is a `timeout` outcome,
//! distinct from the job itself failing.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(90);

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("forge request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("forge returned status {0}")]
    UnexpectedStatus(StatusCode),
}

/// Artifact types the forge can build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    LandingPage,
    Campaign,
    Deck,
    EmailSequence,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Queued,
    Running,
    Complete,
    Failed,
}

impl JobState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct StartedJob {
    pub id: String,
}

/// Raw job status as the forge reports it. `steps` stays opaque JSON;
/// only its length matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JobStatus {
    pub status: JobState,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Terminal result of waiting on a job.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobOutcome {
    Complete { id: String, steps: usize },
    Failed { id: String, error: String },
    Timeout { id: String, waited_ms: u64 },
}

#[derive(Serialize)]
struct StartJobRequest<'a> {
    brief: &'a str,
    #[serde(rename = "type")]
    kind: ArtifactKind,
}

pub struct ForgeClient {
    http: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl ForgeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}/api/forge{}", self.base_url.trim_end_matches('/'), suffix)
    }

    /// Kick off a build job and return its id immediately.
    pub async fn start_job(
        &self,
        brief: &str,
        kind: ArtifactKind,
    ) -> Result<StartedJob, ForgeError> {
        let response = self
            .http
            .post(self.endpoint(""))
            .json(&StartJobRequest { brief, kind })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ForgeError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn job_status(&self, id: &str) -> Result<JobStatus, ForgeError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/{id}")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ForgeError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Poll on a fixed interval until the job reaches a terminal state or
    /// the overall wait is exhausted.
    pub async fn wait_until_terminal(&self, id: &str) -> Result<JobOutcome, ForgeError> {
        let started = Instant::now();

        while started.elapsed() < self.max_wait {
            sleep(self.poll_interval).await;

            let status = self.job_status(id).await?;
            match status.status {
                JobState::Complete => {
                    return Ok(JobOutcome::Complete {
                        id: id.to_string(),
                        steps: status.steps.len(),
                    });
                }
                JobState::Failed => {
                    return Ok(JobOutcome::Failed {
                        id: id.to_string(),
                        error: status
                            .error
                            .unwrap_or_else(|| "Unknown error".to_string()),
                    });
                }
                state => {
                    debug!(job_id = %id, state = ?state, progress = ?status.progress, "Forge job still in flight");
                }
            }
        }

        let waited_ms = started.elapsed().as_millis() as u64;
        warn!(job_id = %id, waited_ms, "Forge job exceeded overall wait");

        Ok(JobOutcome::Timeout {
            id: id.to_string(),
            waited_ms,
        })
    }

    /// Start a job and block until a terminal outcome or the deadline.
    pub async fn run_job(
        &self,
        brief: &str,
        kind: ArtifactKind,
    ) -> Result<JobOutcome, ForgeError> {
        let job = self.start_job(brief, kind).await?;
        self.wait_until_terminal(&job.id).await
    }
}

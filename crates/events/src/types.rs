//! Event types streamed to callers while a run is in flight.

use boardroom_core::{Advisor, AdvisorResult, Recommendation, Verdict};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display projection of an advisor, embedded in progress events so the
/// consumer can render a frame without a registry lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AdvisorRef {
    pub id: String,
    pub name: String,
    pub title: String,
    pub emoji: String,
}

impl From<&Advisor> for AdvisorRef {
    fn from(advisor: &Advisor) -> Self {
        Self {
            id: advisor.id.clone(),
            name: advisor.name.clone(),
            title: advisor.title.clone(),
            emoji: advisor.emoji.clone(),
        }
    }
}

/// One frame of run progress.
///
/// Frames for a run form an ordered sequence: one `thinking` immediately
/// before each advisor's completion call, one `result` or `error`
/// immediately after it, and exactly one terminating `summary`. Events
/// exist only on the wire and are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProgressEvent {
    /// An advisor's completion call is about to be issued.
    Thinking { advisor: AdvisorRef },

    /// An advisor answered; verdict extracted from its output.
    #[serde(rename_all = "camelCase")]
    Result {
        advisor: AdvisorRef,
        verdict: Verdict,
        output: String,
        duration_ms: u64,
    },

    /// An advisor's completion call failed; the run continues.
    Error { advisor: AdvisorRef, message: String },

    /// The run finished. Always the last frame on the channel.
    #[serde(rename_all = "camelCase")]
    Summary {
        total_ms: u64,
        verdicts: Vec<Verdict>,
        overall: Recommendation,
    },
}

impl ProgressEvent {
    pub fn thinking(advisor: &Advisor) -> Self {
        Self::Thinking {
            advisor: advisor.into(),
        }
    }

    pub fn result(advisor: &Advisor, result: &AdvisorResult) -> Self {
        Self::Result {
            advisor: advisor.into(),
            verdict: result.verdict,
            output: result.output.clone(),
            duration_ms: result.duration_ms,
        }
    }

    pub fn error(advisor: &Advisor, message: impl Into<String>) -> Self {
        Self::Error {
            advisor: advisor.into(),
            message: message.into(),
        }
    }

    pub fn summary(total_ms: u64, verdicts: Vec<Verdict>, overall: Recommendation) -> Self {
        Self::Summary {
            total_ms,
            verdicts,
            overall,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Thinking { .. } => "thinking",
            Self::Result { .. } => "result",
            Self::Error { .. } => "error",
            Self::Summary { .. } => "summary",
        }
    }
}

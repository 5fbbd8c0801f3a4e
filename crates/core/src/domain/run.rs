use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::verdict::{OverallVerdict, Verdict};
use crate::error::CoreError;

/// Outcome of one advisor's completion call within a run.
///
/// Immutable once recorded. A failed call still produces a result, with
/// `Verdict::Unknown` and the failure message as output.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "typescript", derive(ts_rs::TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AdvisorResult {
    pub advisor_id: String,
    pub output: String,
    pub verdict: Verdict,
    pub duration_ms: u64,
}

impl AdvisorResult {
    pub fn new(
        advisor_id: impl Into<String>,
        output: impl Into<String>,
        verdict: Verdict,
        duration_ms: u64,
    ) -> Self {
        Self {
            advisor_id: advisor_id.into(),
            output: output.into(),
            verdict,
            duration_ms,
        }
    }
}

/// Where a run currently is in its lifecycle.
///
/// There is no failed terminal state: a run always reaches `Complete`,
/// even when individual advisors error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Running { advisor_index: usize },
    Complete,
}

/// One pipeline execution for one submitted idea.
///
/// Mutated only by appending advisor results and, once, by setting the
/// overall verdict; terminal and immutable after that. Runs are never
/// resumed: a fresh submission starts a fresh run.
#[derive(Debug, Clone)]
pub struct OrchestrationRun {
    id: Uuid,
    idea: String,
    results: Vec<AdvisorResult>,
    total_duration_ms: u64,
    overall: Option<OverallVerdict>,
    state: RunState,
    created_at: DateTime<Utc>,
}

impl OrchestrationRun {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea: idea.into(),
            results: Vec::new(),
            total_duration_ms: 0,
            overall: None,
            state: RunState::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn results(&self) -> &[AdvisorResult] {
        &self.results
    }

    pub fn verdicts(&self) -> Vec<Verdict> {
        self.results.iter().map(|r| r.verdict).collect()
    }

    pub fn overall(&self) -> Option<&OverallVerdict> {
        self.overall.as_ref()
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.total_duration_ms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_complete(&self) -> bool {
        self.state == RunState::Complete
    }

    /// Mark the advisor at `advisor_index` as in flight.
    pub fn begin_advisor(&mut self, advisor_index: usize) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(CoreError::RunComplete(self.id));
        }
        self.state = RunState::Running { advisor_index };
        Ok(())
    }

    /// Append an advisor result. Results arrive in execution order and
    /// are never reordered.
    pub fn record(&mut self, result: AdvisorResult) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(CoreError::RunComplete(self.id));
        }
        self.results.push(result);
        Ok(())
    }

    /// Set the overall verdict and total duration, sealing the run.
    pub fn finalize(
        &mut self,
        overall: OverallVerdict,
        total_duration_ms: u64,
    ) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(CoreError::RunComplete(self.id));
        }
        self.overall = Some(overall);
        self.total_duration_ms = total_duration_ms;
        self.state = RunState::Complete;
        Ok(())
    }

    /// Consume the run into its parts: (idea, results, overall, total ms).
    pub fn into_parts(self) -> (String, Vec<AdvisorResult>, Option<OverallVerdict>, u64) {
        (self.idea, self.results, self.overall, self.total_duration_ms)
    }
}

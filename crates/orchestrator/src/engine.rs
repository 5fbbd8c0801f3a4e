//! Sequential advisor pipeline.
//!
//! One run walks the registry's execution order on a single task: each
//! advisor's completion call is issued only after the previous advisor's
//! result has been folded into the shared context. Advisors are isolated
//! failure domains: a failed call records an `Unknown` result and the
//! pipeline continues, so the caller always receives one result per
//! advisor. A run never resumes; the only hard error before completion is
//! invalid input or a disconnected progress stream.

use std::sync::Arc;
use std::time::Instant;

use boardroom_core::{AdvisorRegistry, AdvisorResult, OrchestrationRun, Verdict};
use events::{ProgressEvent, ProgressSender};
use tracing::{debug, info, warn};

use crate::aggregate::aggregate;
use crate::completion::CompletionBackend;
use crate::context::build_message;
use crate::error::{OrchestratorError, Result};
use crate::extract::VerdictExtractor;
use crate::instructions::InstructionSource;

pub struct Orchestrator {
    registry: AdvisorRegistry,
    backend: Arc<dyn CompletionBackend>,
    instructions: Option<Arc<dyn InstructionSource>>,
    extractor: VerdictExtractor,
}

impl Orchestrator {
    pub fn new(registry: AdvisorRegistry, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            registry,
            backend,
            instructions: None,
            extractor: VerdictExtractor::new(),
        }
    }

    /// Route instruction lookups through an external assembler instead of
    /// the registry's built-in templates.
    pub fn with_instruction_source(mut self, source: Arc<dyn InstructionSource>) -> Self {
        self.instructions = Some(source);
        self
    }

    pub fn registry(&self) -> &AdvisorRegistry {
        &self.registry
    }

    /// Execute one run for `idea`, reporting progress when a sender is
    /// given. Returns the completed run; per-advisor failures do not fail
    /// the run, a disconnected consumer abandons it.
    pub async fn run(
        &self,
        idea: &str,
        reporter: Option<&ProgressSender>,
    ) -> Result<OrchestrationRun> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "idea must not be empty".to_string(),
            ));
        }

        let started = Instant::now();
        let mut run = OrchestrationRun::new(idea);

        info!(
            run_id = %run.id(),
            advisors = self.registry.len(),
            "Starting advisory run"
        );

        for (index, advisor) in self.registry.iter_ordered().enumerate() {
            run.begin_advisor(index)?;

            let message = build_message(idea, &self.registry, run.results());

            self.emit(reporter, ProgressEvent::thinking(advisor), &run)
                .await?;

            let instructions = self.resolve_instructions(advisor);

            let call_started = Instant::now();
            let outcome = self.backend.complete(&instructions, &message).await;
            let duration_ms = call_started.elapsed().as_millis() as u64;

            let event = match outcome {
                Ok(output) => {
                    let verdict = self.extractor.extract(&output);
                    let result =
                        AdvisorResult::new(advisor.id.as_str(), output, verdict, duration_ms);
                    let event = ProgressEvent::result(advisor, &result);

                    info!(
                        run_id = %run.id(),
                        advisor = %advisor.id,
                        verdict = verdict.as_str(),
                        duration_ms,
                        "Advisor answered"
                    );

                    run.record(result)?;
                    event
                }
                Err(e) => {
                    warn!(
                        run_id = %run.id(),
                        advisor = %advisor.id,
                        error = %e,
                        duration_ms,
                        "Advisor call failed, continuing with remaining advisors"
                    );

                    let failure = e.to_string();
                    run.record(AdvisorResult::new(
                        advisor.id.as_str(),
                        failure.clone(),
                        Verdict::Unknown,
                        duration_ms,
                    ))?;
                    ProgressEvent::error(advisor, failure)
                }
            };

            self.emit(reporter, event, &run).await?;
        }

        let overall = aggregate(&run.verdicts());
        let total_ms = started.elapsed().as_millis() as u64;
        let summary = ProgressEvent::summary(total_ms, run.verdicts(), overall.recommendation);

        info!(
            run_id = %run.id(),
            total_ms,
            recommendation = overall.recommendation.as_str(),
            "Advisory run complete"
        );

        run.finalize(overall, total_ms)?;
        self.emit(reporter, summary, &run).await?;

        Ok(run)
    }

    fn resolve_instructions(&self, advisor: &boardroom_core::Advisor) -> String {
        self.instructions
            .as_ref()
            .and_then(|source| source.instruction_template(&advisor.id))
            .unwrap_or_else(|| advisor.instructions.clone())
    }

    /// Push one progress event. A failed send means the consumer hung up:
    /// stop issuing completion calls and abandon the run.
    async fn emit(
        &self,
        reporter: Option<&ProgressSender>,
        event: ProgressEvent,
        run: &OrchestrationRun,
    ) -> Result<()> {
        let Some(reporter) = reporter else {
            return Ok(());
        };

        if reporter.emit(event).await.is_err() {
            debug!(run_id = %run.id(), "Progress consumer disconnected, abandoning run");
            return Err(OrchestratorError::StreamDisconnected);
        }

        Ok(())
    }
}

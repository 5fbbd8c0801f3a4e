pub mod aggregate;
pub mod completion;
pub mod context;
pub mod engine;
pub mod error;
pub mod extract;
pub mod forge;
pub mod instructions;
pub mod personas;

pub use aggregate::aggregate;
pub use completion::{ChatCompletionClient, CompletionBackend, CompletionError};
pub use context::build_message;
pub use engine::Orchestrator;
pub use error::{OrchestratorError, Result};
pub use extract::VerdictExtractor;
pub use forge::{
    ArtifactKind, ForgeClient, ForgeError, JobOutcome, JobState, JobStatus, StartedJob,
};
pub use instructions::{InstructionSource, StaticInstructions};

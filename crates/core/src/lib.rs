pub mod domain;
pub mod error;

pub use domain::advisor::{Advisor, AdvisorRegistry};
pub use domain::run::{AdvisorResult, OrchestrationRun, RunState};
pub use domain::verdict::{OverallVerdict, Recommendation, Verdict};
pub use error::CoreError;

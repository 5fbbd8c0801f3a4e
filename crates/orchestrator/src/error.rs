use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Progress stream disconnected")]
    StreamDisconnected,

    #[error(transparent)]
    Run(#[from] boardroom_core::CoreError),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

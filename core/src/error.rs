use thiserror::Error;

/// Domain errors of the task core.
///
/// The split matters at the API boundary: `Validation` maps to a 400 and is
/// never retried, `Storage` maps to a 500 and is safe to retry. Retrying is
/// the caller's responsibility; the service layer never retries internally.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid task: {0}")]
    Validation(String),

    #[error("task storage failed: {0}")]
    Storage(#[from] anyhow::Error),
}

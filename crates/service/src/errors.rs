use thiserror::Error;

/// Unchecked faults. Checked outcomes (not found, missing payload, invalid
/// input) travel inside `Header` envelopes instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error("internal error: {0}")]
    Internal(String),
}

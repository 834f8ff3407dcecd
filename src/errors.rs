use thiserror::Error;

/// Failures decoding a platform event into the crate's internal models.
///
/// These are the only errors the system produces: configuration loading
/// is infallible and the handlers themselves have no failure path.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to decode API Gateway event: {0}")]
    Gateway(String),

    #[error("Failed to decode SQS event: {0}")]
    Queue(#[from] serde_json::Error),
}

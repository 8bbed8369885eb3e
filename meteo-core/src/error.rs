use thiserror::Error;

/// Errors surfaced by the client. Nothing is retried internally;
/// every failure is returned directly to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Request rejected locally, before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure reported by the HTTP layer: connection error, timeout,
    /// or a non-success status from the forecast endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not satisfy the minimal expected shape.
    #[error("response contract violated: {0}")]
    ResponseContract(String),
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_response_contract(&self) -> bool {
        matches!(self, Error::ResponseContract(_))
    }
}

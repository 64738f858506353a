use thiserror::Error;

/// Failure of a single backend call, as reported to the initiating view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend could not be reached at all
    #[error("Network Error: Unable to connect to server at {backend}. Make sure the backend is running.")]
    Connectivity { backend: String },

    /// The backend answered with a non-2xx status
    #[error("Server Error: {status} - {body}")]
    Server { status: u16, body: String },

    /// Any other transport failure, propagated as-is
    #[error("Request Error: {0}")]
    Request(String),

    /// A record was expected but the response had no body
    #[error("Request Error: empty response from {0}")]
    EmptyResponse(String),

    #[error("Response Error: {0}")]
    Decode(String),

    #[error("Request Error: cannot encode body: {0}")]
    Encode(String),
}

use thiserror::Error;

/// Failures surfaced by the backend contract in [`crate::api`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist, e.g. a year with no archive.
    #[error("Resource not found")]
    NotFound,

    /// The backend rejected the bearer credential or none was attached.
    #[error("Not authorized")]
    Unauthorized,

    /// The backend answered with its own error message.
    #[error("{0}")]
    Backend(String),

    /// The request never produced a usable response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(feature = "client")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

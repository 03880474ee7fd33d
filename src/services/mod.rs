//! Services coordinating the rollover workflows against the backend traits.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::forms::close_year::CloseYearFormError;
use crate::forms::start_new_year::StartNewYearFormError;

pub mod close_year;
pub mod files;
pub mod start_new_year;
pub mod year_state;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A local validation gate rejected the input; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// A mutating action was invoked while another one was still in flight.
    #[error("another action is still in progress")]
    AlreadyRunning,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<CloseYearFormError> for ServiceError {
    fn from(err: CloseYearFormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<StartNewYearFormError> for ServiceError {
    fn from(err: StartNewYearFormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

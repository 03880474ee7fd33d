//! The start-new-year transition: establishes the next current year.

use crate::api::{ArchiveWriter, StartNewYearRequest};
use crate::forms::start_new_year::StartNewYearForm;
use crate::services::ServiceResult;

/// Establishes a new current year, optionally carrying the roster forward.
///
/// The year label is validated locally; a rejected draft never contacts the
/// backend. A non-error response means the new year exists; the caller
/// re-resolves the page state afterwards.
pub async fn start_new_year<R>(form: &StartNewYearForm, repo: &R) -> ServiceResult<()>
where
    R: ArchiveWriter + ?Sized,
{
    let request = StartNewYearRequest::try_from(form)?;

    repo.start_new_year(&request).await.map_err(|err| {
        log::error!("Failed to start new year: {err}");
        err.into()
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockBackend;
    use crate::services::ServiceError;

    fn valid_form() -> StartNewYearForm {
        StartNewYearForm {
            new_year: "2026-2027".to_string(),
            theme: "Unite for Good".to_string(),
            ..Default::default()
        }
    }

    /// An empty year is rejected locally with no network traffic.
    #[tokio::test]
    async fn empty_year_issues_no_request() {
        let mut repo = MockBackend::new();
        repo.expect_start_new_year().times(0);

        let result = start_new_year(&StartNewYearForm::default(), &repo).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn success_sends_form_fields() {
        let mut repo = MockBackend::new();
        repo.expect_start_new_year()
            .withf(|request| {
                request.new_year == "2026-2027"
                    && request.theme == "Unite for Good"
                    && request.carry_over_members
            })
            .times(1)
            .returning(|_| Ok(()));

        start_new_year(&valid_form(), &repo)
            .await
            .expect("start succeeds");
    }

    #[tokio::test]
    async fn backend_rejection_is_surfaced() {
        let mut repo = MockBackend::new();
        repo.expect_start_new_year()
            .times(1)
            .returning(|_| Err(ApiError::Backend("year already exists".to_string())));

        let err = start_new_year(&valid_form(), &repo)
            .await
            .expect_err("start fails");
        assert_eq!(err.to_string(), "year already exists");
    }
}

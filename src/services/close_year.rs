//! The close-year transition: checklist-gated, irreversible on the backend.

use crate::api::{ArchiveWriter, CloseYearRequest};
use crate::forms::close_year::CloseYearForm;
use crate::services::ServiceResult;

/// Requests the backend to lock the current year and archive it.
///
/// The checklist gate is enforced locally before anything is sent; the
/// backend still validates its own preconditions. A non-error response means
/// the year is closed; re-resolving the page state afterwards is the
/// caller's responsibility and its outcome does not undo the close.
pub async fn close_year<R>(form: &CloseYearForm, repo: &R) -> ServiceResult<()>
where
    R: ArchiveWriter + ?Sized,
{
    let request = CloseYearRequest::try_from(form)?;

    repo.close_year(&request).await.map_err(|err| {
        log::error!("Failed to close year: {err}");
        err.into()
    })
}

//! Current-year resolution across three possibly-inconsistent sources.
//!
//! The archive list is the primary source of truth and its failure is fatal;
//! settings, dashboard, and the event-wise report degrade silently to the
//! next-best source.

use crate::api::errors::ApiError;
use crate::api::{ArchiveReader, DashboardReader, ReportReader, SettingsReader};
use crate::domain::archive::{ArchiveFile, ArchiveStatus, YearArchive};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::settings::ClubSettings;
use crate::domain::types::RotaractYear;
use crate::dto::year_state::{CurrentYearView, YearState};
use crate::services::ServiceResult;

/// Picks the archive describing the open year.
///
/// The backend should hold at most one `active` record, but the client does
/// not assume it: first active record wins, then the first record of the
/// list, then none.
#[must_use]
pub fn select_active_archive(archives: &[YearArchive]) -> Option<&YearArchive> {
    archives
        .iter()
        .find(|archive| archive.status == ArchiveStatus::Active)
        .or_else(|| archives.first())
}

/// Resolves the effective current year label.
///
/// Precedence: active archive's year, then the settings' current year, then
/// the supplied last resort (the current calendar year in production) so the
/// page always has something to display.
#[must_use]
pub fn effective_year(
    active: Option<&YearArchive>,
    settings: Option<&ClubSettings>,
    last_resort: RotaractYear,
) -> RotaractYear {
    active
        .map(|archive| archive.rotaract_year.clone())
        .or_else(|| settings.and_then(|settings| settings.current_rotaract_year.clone()))
        .unwrap_or(last_resort)
}

/// Builds the headline metric view for the effective year.
///
/// Live dashboard numbers win when the dashboard reports the same year;
/// otherwise the active archive's frozen summary is used; otherwise zero
/// placeholders.
#[must_use]
pub fn current_view(
    year: &RotaractYear,
    active: Option<&YearArchive>,
    dashboard: Option<&DashboardSnapshot>,
) -> CurrentYearView {
    if let Some(dashboard) =
        dashboard.filter(|snapshot| snapshot.rotaract_year.as_deref() == Some(year.as_str()))
    {
        let summary = &dashboard.summary;
        return CurrentYearView {
            year: year.clone(),
            status: ArchiveStatus::Active,
            total_contributions: summary.total_contributions,
            total_expenses: summary.total_spending,
            members: summary.total_members,
            events: summary.total_events,
            pending_reimbursements: summary.pending_reimbursements,
            pending_approvals: summary.pending_count,
        };
    }

    if let Some(archive) = active {
        let summary = &archive.summary;
        return CurrentYearView {
            year: archive.rotaract_year.clone(),
            status: archive.status,
            total_contributions: summary.total_contributions,
            total_expenses: summary.total_expenses,
            members: summary.total_members,
            events: summary.total_events,
            pending_reimbursements: 0.0,
            pending_approvals: 0,
        };
    }

    CurrentYearView::placeholder(year.clone())
}

/// Fetches the archived files of one year.
///
/// A year without an archive record (such as the currently open year) is a
/// normal state, not a failure, and yields an empty list.
pub async fn load_archive_files<R>(
    repo: &R,
    year: &RotaractYear,
) -> ServiceResult<Vec<ArchiveFile>>
where
    R: ArchiveReader + ?Sized,
{
    match repo.get_archive_by_year(year).await {
        Ok(archive) => Ok(archive.files),
        Err(ApiError::NotFound) => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// Resolves the full archive page state.
///
/// Archive list, settings, and dashboard are fetched concurrently; only the
/// archive list failure aborts the resolution. The displayed total expenses
/// is then overridden by the event-wise report's budget sum when that call
/// succeeds, and the effective year's file list is pre-loaded.
pub async fn load_year_state<R>(repo: &R) -> ServiceResult<YearState>
where
    R: ArchiveReader + SettingsReader + DashboardReader + ReportReader + ?Sized,
{
    let (archives, settings, dashboard) = tokio::join!(
        repo.list_archives(),
        repo.get_settings(),
        repo.get_admin_dashboard(),
    );

    let archives = archives.map_err(|err| {
        log::error!("Failed to load archive list: {err}");
        err
    })?;
    let settings = settings.ok();
    let dashboard = dashboard.ok();

    let active = select_active_archive(&archives);
    let year = effective_year(
        active,
        settings.as_ref(),
        RotaractYear::current_calendar(),
    );
    let mut current = current_view(&year, active, dashboard.as_ref());

    if let Ok(report) = repo.get_event_wise_report().await {
        current.total_expenses = report.total_estimated_budget();
    }

    let files = load_archive_files(repo, &year).await.unwrap_or_default();

    Ok(YearState {
        current,
        archives,
        selected_year: year,
        files,
    })
}

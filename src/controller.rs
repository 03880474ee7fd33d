//! Stateful controller behind the archive page.
//!
//! Owns the resolved year state, the two transition dialogs' draft forms, the
//! fatal-error banner, and the single-flight guard shared by all mutating
//! actions. Everything network-facing is delegated to the service layer; this
//! type only sequences it.

use crate::api::{ArchiveReader, ArchiveWriter, DashboardReader, ReportReader, SettingsReader};
use crate::domain::archive::ArchiveFile;
use crate::domain::types::RotaractYear;
use crate::dto::year_state::{DownloadedFile, YearState};
use crate::forms::close_year::CloseYearForm;
use crate::forms::start_new_year::StartNewYearForm;
use crate::services::{self, ServiceError, ServiceResult};

pub struct ArchiveController<R> {
    repo: R,
    state: Option<YearState>,
    error: Option<String>,
    /// Draft state of the close-year dialog, reset after a successful close.
    pub close_year_form: CloseYearForm,
    /// Draft state of the start-new-year dialog, reset after a successful
    /// start.
    pub new_year_form: StartNewYearForm,
    /// Gates every mutating action; at most one may be in flight.
    action_in_flight: bool,
}

impl<R> ArchiveController<R>
where
    R: ArchiveReader + ArchiveWriter + SettingsReader + DashboardReader + ReportReader,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: None,
            error: None,
            close_year_form: CloseYearForm::default(),
            new_year_form: StartNewYearForm::default(),
            action_in_flight: false,
        }
    }

    /// Resolved state of the page, once a resolution has succeeded.
    pub fn state(&self) -> Option<&YearState> {
        self.state.as_ref()
    }

    /// Message of the last fatal resolution failure; cleared on the next
    /// successful resolution. Retries are user-initiated only.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a mutating action is in flight.
    pub fn is_busy(&self) -> bool {
        self.action_in_flight
    }

    /// Whether the close-year submit control is enabled.
    pub fn can_close_year(&self) -> bool {
        self.close_year_form.checklist.all_confirmed() && !self.action_in_flight
    }

    /// Re-resolves the full year state, replacing the error banner with fresh
    /// data or fresh data with an error banner.
    pub async fn refresh(&mut self) -> ServiceResult<()> {
        match services::year_state::load_year_state(&self.repo).await {
            Ok(state) => {
                self.state = Some(state);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn begin_action(&mut self) -> ServiceResult<()> {
        if self.action_in_flight {
            return Err(ServiceError::AlreadyRunning);
        }
        self.action_in_flight = true;
        Ok(())
    }

    /// Submits the close-year transition.
    ///
    /// A rejected submit leaves the dialog's draft untouched so the user
    /// need not re-check items before retrying. Once the backend confirms
    /// the close the checklist is reset regardless of what the follow-up
    /// re-resolution does; a failing re-resolution raises the page-level
    /// error banner, it does not reopen the dialog.
    pub async fn close_year(&mut self) -> ServiceResult<()> {
        self.begin_action()?;
        let result = services::close_year::close_year(&self.close_year_form, &self.repo).await;
        self.action_in_flight = false;
        result?;

        self.close_year_form.reset();
        self.refresh().await
    }

    /// Submits the start-new-year transition.
    ///
    /// Validation failures are local and issue no request; the draft is
    /// preserved for correction and resubmission. Once the backend confirms
    /// the new year the form is reset, and the follow-up re-resolution
    /// failure goes to the error banner like any other refresh failure.
    pub async fn start_new_year(&mut self) -> ServiceResult<()> {
        self.begin_action()?;
        let result = services::start_new_year::start_new_year(&self.new_year_form, &self.repo).await;
        self.action_in_flight = false;
        result?;

        self.new_year_form.reset();
        self.refresh().await
    }

    /// Switches the files view to another year, degrading to an empty list
    /// when that year's files cannot be fetched.
    pub async fn select_year(&mut self, year: RotaractYear) {
        let files = services::year_state::load_archive_files(&self.repo, &year)
            .await
            .unwrap_or_default();
        if let Some(state) = &mut self.state {
            state.selected_year = year;
            state.files = files;
        }
    }

    /// Uploads a file into the selected year's archive and replaces the
    /// cached file list with the server's returned array.
    pub async fn upload_file(&mut self, file_name: &str, bytes: Vec<u8>) -> ServiceResult<()> {
        let Some(year) = self.state.as_ref().map(|state| state.selected_year.clone()) else {
            return Err(ServiceError::Validation(
                "select a year before uploading".to_string(),
            ));
        };

        self.begin_action()?;
        let result = services::files::upload_archive_file(&self.repo, &year, file_name, bytes).await;
        self.action_in_flight = false;

        let files = result?;
        if let Some(state) = &mut self.state {
            state.files = files;
        }
        Ok(())
    }

    /// Downloads a year's financial report PDF.
    pub async fn download_report(&self, year: &RotaractYear) -> ServiceResult<DownloadedFile> {
        services::files::download_financial_report(&self.repo, year).await
    }

    /// Downloads one archived file.
    pub async fn download_file(&self, file: &ArchiveFile) -> ServiceResult<DownloadedFile> {
        services::files::download_archive_file(&self.repo, file).await
    }
}

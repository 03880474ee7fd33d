//! Contract with the REST backend that owns persistence, locking, and the
//! actual year transition mechanics.
//!
//! The traits below are the only seam the workflow layer talks through; the
//! production implementation is [`http::HttpBackend`] and tests substitute
//! [`mock::MockBackend`].

use async_trait::async_trait;
use serde::Serialize;

use crate::api::errors::ApiResult;
use crate::domain::archive::{ArchiveFile, FileType, YearArchive};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::report::EventWiseReport;
use crate::domain::settings::ClubSettings;
use crate::domain::types::RotaractYear;

pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Opaque bearer credential bound to a constructed backend.
///
/// When absent the `Authorization` header is simply omitted; a token is never
/// fabricated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Payload of the close-year transition.
///
/// `notes` exists in the backend contract but is not yet wired to any
/// front-end control, so it is always sent empty.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloseYearRequest {
    pub notes: String,
    pub carry_over_members: bool,
}

/// Payload of the start-new-year transition.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartNewYearRequest {
    pub new_year: RotaractYear,
    pub theme: String,
    pub carry_over_members: bool,
}

/// A local file staged for upload into a year's archive.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub file_type: FileType,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Stages a file, inferring its type from the name's extension.
    #[must_use]
    pub fn new<S: Into<String>>(name: S, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let file_type = FileType::from_extension(&name);
        Self {
            name,
            file_type,
            bytes,
        }
    }
}

#[async_trait]
pub trait ArchiveReader {
    /// Lists every archive record, the primary source of truth for past years.
    async fn list_archives(&self) -> ApiResult<Vec<YearArchive>>;
    /// Fetches one year's archive record; `ApiError::NotFound` when the year
    /// has never been archived.
    async fn get_archive_by_year(&self, year: &RotaractYear) -> ApiResult<YearArchive>;
    /// Fetches the raw bytes behind an archived file's URL.
    async fn download_file(&self, url: &str) -> ApiResult<Vec<u8>>;
}

#[async_trait]
pub trait ArchiveWriter {
    /// Locks the current year's data and creates its archival snapshot.
    async fn close_year(&self, request: &CloseYearRequest) -> ApiResult<()>;
    /// Establishes a new current year, optionally carrying members forward.
    async fn start_new_year(&self, request: &StartNewYearRequest) -> ApiResult<()>;
    /// Appends a file to a year's archive, returning the full updated list.
    async fn add_archive_file(
        &self,
        year: &RotaractYear,
        upload: FileUpload,
    ) -> ApiResult<Vec<ArchiveFile>>;
}

#[async_trait]
pub trait SettingsReader {
    async fn get_settings(&self) -> ApiResult<ClubSettings>;
}

#[async_trait]
pub trait DashboardReader {
    async fn get_admin_dashboard(&self) -> ApiResult<DashboardSnapshot>;
}

#[async_trait]
pub trait ReportReader {
    /// Event-wise report for the backend's default financial year.
    async fn get_event_wise_report(&self) -> ApiResult<EventWiseReport>;
    /// Exports the year's financial report as a binary PDF.
    async fn export_financial_report(&self, year: &RotaractYear) -> ApiResult<Vec<u8>>;
}

//! Mock backend implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{
    ArchiveReader, ArchiveWriter, CloseYearRequest, DashboardReader, FileUpload, ReportReader,
    SettingsReader, StartNewYearRequest,
};
use crate::domain::archive::{ArchiveFile, YearArchive};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::report::EventWiseReport;
use crate::domain::settings::ClubSettings;
use crate::domain::types::RotaractYear;

mock! {
    pub Backend {}

    #[async_trait]
    impl ArchiveReader for Backend {
        async fn list_archives(&self) -> ApiResult<Vec<YearArchive>>;
        async fn get_archive_by_year(&self, year: &RotaractYear) -> ApiResult<YearArchive>;
        async fn download_file(&self, url: &str) -> ApiResult<Vec<u8>>;
    }

    #[async_trait]
    impl ArchiveWriter for Backend {
        async fn close_year(&self, request: &CloseYearRequest) -> ApiResult<()>;
        async fn start_new_year(&self, request: &StartNewYearRequest) -> ApiResult<()>;
        async fn add_archive_file(
            &self,
            year: &RotaractYear,
            upload: FileUpload,
        ) -> ApiResult<Vec<ArchiveFile>>;
    }

    #[async_trait]
    impl SettingsReader for Backend {
        async fn get_settings(&self) -> ApiResult<ClubSettings>;
    }

    #[async_trait]
    impl DashboardReader for Backend {
        async fn get_admin_dashboard(&self) -> ApiResult<DashboardSnapshot>;
    }

    #[async_trait]
    impl ReportReader for Backend {
        async fn get_event_wise_report(&self) -> ApiResult<EventWiseReport>;
        async fn export_financial_report(&self, year: &RotaractYear) -> ApiResult<Vec<u8>>;
    }
}

//! Per-year archive document management: upload and download.

use crate::api::{ArchiveReader, ArchiveWriter, FileUpload, ReportReader};
use crate::domain::archive::ArchiveFile;
use crate::domain::types::RotaractYear;
use crate::dto::year_state::DownloadedFile;
use crate::services::ServiceResult;
use crate::{FINANCIAL_REPORT_PREFIX, UNNAMED_ARCHIVE_FILE};

/// Uploads one local file into a year's archive.
///
/// The type is inferred from the file extension. The returned list is the
/// server's full updated array and replaces any cached list wholesale; append
/// semantics are entirely the server's responsibility.
pub async fn upload_archive_file<R>(
    repo: &R,
    year: &RotaractYear,
    file_name: &str,
    bytes: Vec<u8>,
) -> ServiceResult<Vec<ArchiveFile>>
where
    R: ArchiveWriter + ?Sized,
{
    let upload = FileUpload::new(file_name, bytes);
    log::info!(
        "Uploading {} ({}) into archive {year}",
        upload.name,
        upload.file_type.as_str()
    );

    repo.add_archive_file(year, upload).await.map_err(|err| {
        log::error!("Failed to upload archive file: {err}");
        err.into()
    })
}

/// Downloads one archived file, naming it after its archive entry.
pub async fn download_archive_file<R>(repo: &R, file: &ArchiveFile) -> ServiceResult<DownloadedFile>
where
    R: ArchiveReader + ?Sized,
{
    let bytes = repo.download_file(&file.url).await.map_err(|err| {
        log::error!("Failed to download archive file: {err}");
        err
    })?;
    let file_name = if file.name.is_empty() {
        UNNAMED_ARCHIVE_FILE.to_string()
    } else {
        file.name.clone()
    };
    Ok(DownloadedFile { file_name, bytes })
}

/// Exports a year's financial report PDF under a synthesized filename.
pub async fn download_financial_report<R>(
    repo: &R,
    year: &RotaractYear,
) -> ServiceResult<DownloadedFile>
where
    R: ReportReader + ?Sized,
{
    let bytes = repo.export_financial_report(year).await.map_err(|err| {
        log::error!("Failed to download financial report: {err}");
        err
    })?;
    Ok(DownloadedFile {
        file_name: format!("{FINANCIAL_REPORT_PREFIX}-{year}.pdf"),
        bytes,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockBackend;
    use crate::domain::archive::FileType;
    use crate::services::ServiceError;

    fn year() -> RotaractYear {
        RotaractYear::new("2024-2025").expect("valid year")
    }

    /// The inferred type travels with the multipart upload.
    #[tokio::test]
    async fn upload_infers_type_from_extension() {
        let mut repo = MockBackend::new();
        repo.expect_add_archive_file()
            .withf(|_, upload| {
                upload.name == "report.PDF" && upload.file_type == FileType::FinancialReport
            })
            .times(1)
            .returning(|_, _| {
                Ok(vec![ArchiveFile {
                    name: "report.PDF".to_string(),
                    file_type: FileType::FinancialReport,
                    url: "/files/report.pdf".to_string(),
                }])
            });

        let files = upload_archive_file(&repo, &year(), "report.PDF", vec![1, 2, 3])
            .await
            .expect("upload succeeds");
        assert_eq!(files.len(), 1);
    }

    /// The server's returned array is the new source of truth, not an append.
    #[tokio::test]
    async fn upload_returns_the_servers_full_list() {
        let server_list = vec![
            ArchiveFile {
                name: "old.pdf".to_string(),
                file_type: FileType::FinancialReport,
                url: "/files/old.pdf".to_string(),
            },
            ArchiveFile {
                name: "bills.zip".to_string(),
                file_type: FileType::BillsArchive,
                url: "/files/bills.zip".to_string(),
            },
        ];
        let returned = server_list.clone();

        let mut repo = MockBackend::new();
        repo.expect_add_archive_file()
            .times(1)
            .returning(move |_, _| Ok(returned.clone()));

        let files = upload_archive_file(&repo, &year(), "bills.zip", vec![0])
            .await
            .expect("upload succeeds");
        assert_eq!(files, server_list);
    }

    #[tokio::test]
    async fn report_download_synthesizes_filename() {
        let mut repo = MockBackend::new();
        repo.expect_export_financial_report()
            .times(1)
            .returning(|_| Ok(vec![0x25, 0x50, 0x44, 0x46]));

        let download = download_financial_report(&repo, &year())
            .await
            .expect("download succeeds");
        assert_eq!(download.file_name, "financial-report-2024-2025.pdf");
        assert_eq!(download.bytes, vec![0x25, 0x50, 0x44, 0x46]);
    }

    #[tokio::test]
    async fn failed_download_is_surfaced_without_retry() {
        let mut repo = MockBackend::new();
        repo.expect_download_file()
            .times(1)
            .returning(|_| Err(ApiError::Backend("Failed to download file".to_string())));

        let file = ArchiveFile {
            name: String::new(),
            file_type: FileType::Other,
            url: "/files/missing".to_string(),
        };
        let result = download_archive_file(&repo, &file).await;
        assert!(matches!(result, Err(ServiceError::Api(_))));
    }

    #[tokio::test]
    async fn unnamed_file_gets_fallback_name() {
        let mut repo = MockBackend::new();
        repo.expect_download_file()
            .times(1)
            .returning(|_| Ok(vec![1]));

        let file = ArchiveFile {
            name: String::new(),
            file_type: FileType::Other,
            url: "/files/blob".to_string(),
        };
        let download = download_archive_file(&repo, &file).await.expect("download");
        assert_eq!(download.file_name, "archive-file");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RotaractYear;

/// Lifecycle state of a [`YearArchive`] record.
///
/// At most one record should be `Active`; the backend enforces this and the
/// client only tolerates violations through the resolution policy in
/// [`crate::services::year_state`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveStatus {
    Active,
    Archived,
}

/// Aggregated totals frozen into an archive when its year is closed.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct YearSummary {
    pub total_contributions: f64,
    pub total_expenses: f64,
    pub total_members: u64,
    pub total_events: u64,
}

/// Classification of an archived document, derived from its file extension.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    FinancialReport,
    MemberList,
    BillsArchive,
    Other,
}

impl FileType {
    /// Infers the type from the final file extension, case-insensitively.
    ///
    /// Best-effort heuristic only; a mislabeled extension yields a mislabeled
    /// type with no content inspection.
    #[must_use]
    pub fn from_extension(file_name: &str) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Self::FinancialReport,
            Some("xlsx") | Some("xls") => Self::MemberList,
            Some("zip") => Self::BillsArchive,
            _ => Self::Other,
        }
    }

    /// Wire name used by the backend's multipart upload endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinancialReport => "financial_report",
            Self::MemberList => "member_list",
            Self::BillsArchive => "bills_archive",
            Self::Other => "other",
        }
    }
}

/// One supplementary document attached to a year's archive.
///
/// Entries are append-only: an archived year may still receive new files but
/// existing ones are never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArchiveFile {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(default)]
    pub url: String,
}

/// Persisted record describing one Rotaract year.
///
/// `summary` is immutable once `status` becomes [`ArchiveStatus::Archived`];
/// `closed_at` is set only on that transition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearArchive {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub rotaract_year: RotaractYear,
    pub status: ArchiveStatus,
    #[serde(default)]
    pub summary: YearSummary,
    #[serde(default)]
    pub files: Vec<ArchiveFile>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_inference_is_case_insensitive() {
        assert_eq!(
            FileType::from_extension("report.PDF"),
            FileType::FinancialReport
        );
        assert_eq!(FileType::from_extension("roster.xlsx"), FileType::MemberList);
        assert_eq!(FileType::from_extension("roster.XLS"), FileType::MemberList);
        assert_eq!(FileType::from_extension("bills.zip"), FileType::BillsArchive);
        assert_eq!(FileType::from_extension("notes.txt"), FileType::Other);
        assert_eq!(FileType::from_extension("no-extension"), FileType::Other);
    }

    #[test]
    fn archive_deserializes_backend_payload() {
        let payload = serde_json::json!({
            "_id": "abc123",
            "rotaractYear": "2024-2025",
            "status": "archived",
            "summary": {
                "totalContributions": 125000.0,
                "totalExpenses": 89000.5,
                "totalMembers": 42,
                "totalEvents": 11
            },
            "files": [
                { "name": "report.pdf", "type": "financial_report", "url": "/files/report.pdf" }
            ],
            "closedAt": "2025-06-30T18:30:00Z"
        });

        let archive: YearArchive = serde_json::from_value(payload).expect("valid archive");
        assert_eq!(archive.rotaract_year, "2024-2025");
        assert_eq!(archive.status, ArchiveStatus::Archived);
        assert_eq!(archive.summary.total_members, 42);
        assert_eq!(archive.files[0].file_type, FileType::FinancialReport);
        assert!(archive.closed_at.is_some());
        assert!(archive.created_at.is_none());
    }

    #[test]
    fn missing_summary_defaults_to_zeroes() {
        let payload = serde_json::json!({
            "rotaractYear": "2025-2026",
            "status": "active"
        });

        let archive: YearArchive = serde_json::from_value(payload).expect("valid archive");
        assert_eq!(archive.summary, YearSummary::default());
        assert!(archive.files.is_empty());
    }
}

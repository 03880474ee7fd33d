use crate::domain::archive::{ArchiveFile, ArchiveStatus, YearArchive};
use crate::domain::types::RotaractYear;

/// Headline metrics of the effective current year.
///
/// Depending on which sources answered, the numbers come from the live
/// dashboard, from the active archive's frozen summary, or are all-zero
/// placeholders with only the year label populated.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentYearView {
    pub year: RotaractYear,
    pub status: ArchiveStatus,
    pub total_contributions: f64,
    pub total_expenses: f64,
    pub members: u64,
    pub events: u64,
    pub pending_reimbursements: f64,
    pub pending_approvals: u64,
}

impl CurrentYearView {
    /// Placeholder view shown when neither the dashboard nor any archive
    /// could describe the year.
    #[must_use]
    pub fn placeholder(year: RotaractYear) -> Self {
        Self {
            year,
            status: ArchiveStatus::Active,
            total_contributions: 0.0,
            total_expenses: 0.0,
            members: 0,
            events: 0,
            pending_reimbursements: 0.0,
            pending_approvals: 0,
        }
    }
}

/// Full resolved state of the archive page.
#[derive(Clone, Debug, PartialEq)]
pub struct YearState {
    pub current: CurrentYearView,
    pub archives: Vec<YearArchive>,
    /// Year whose archived files are shown; pre-selected to the effective
    /// current year.
    pub selected_year: RotaractYear,
    pub files: Vec<ArchiveFile>,
}

/// Binary payload ready to be saved under a synthesized filename.
#[derive(Clone, Debug, PartialEq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

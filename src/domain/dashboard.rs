use serde::{Deserialize, Serialize};

/// Live aggregation reported by the admin dashboard endpoint.
///
/// Considered fresher than a possibly-stale archive summary, so its numbers
/// win whenever its reported year matches the effective current year.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    pub rotaract_year: Option<String>,
    pub summary: DashboardSummary,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_contributions: f64,
    /// The dashboard reports expenses under this name, unlike archive
    /// summaries which call the same figure `totalExpenses`.
    pub total_spending: f64,
    pub total_members: u64,
    pub total_events: u64,
    pub pending_reimbursements: f64,
    pub pending_count: u64,
}

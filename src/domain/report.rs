use serde::{Deserialize, Serialize};

/// Event-wise spending report for the backend's default financial year.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventWiseReport {
    pub events: Vec<EventReportRow>,
}

impl EventWiseReport {
    /// Sum of estimated budgets across all reported events.
    ///
    /// Overrides the displayed total expenses when the report call succeeds.
    #[must_use]
    pub fn total_estimated_budget(&self) -> f64 {
        self.events.iter().map(|event| event.estimated_budget).sum()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventReportRow {
    pub name: Option<String>,
    pub estimated_budget: f64,
    pub actual_spending: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_total_sums_all_events() {
        let report = EventWiseReport {
            events: vec![
                EventReportRow {
                    estimated_budget: 1200.0,
                    ..Default::default()
                },
                EventReportRow {
                    estimated_budget: 800.5,
                    ..Default::default()
                },
            ],
        };
        assert_eq!(report.total_estimated_budget(), 2000.5);
        assert_eq!(EventWiseReport::default().total_estimated_budget(), 0.0);
    }
}

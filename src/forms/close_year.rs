use thiserror::Error;

use crate::api::CloseYearRequest;

/// The four confirmations required before the close-year submit unlocks.
///
/// A UX safeguard only; the backend still validates its own business
/// preconditions such as pending approvals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloseYearChecklist {
    pub export_data: bool,
    pub verify_amounts: bool,
    pub notify_members: bool,
    pub backup_complete: bool,
}

impl CloseYearChecklist {
    #[must_use]
    pub fn all_confirmed(&self) -> bool {
        self.export_data && self.verify_amounts && self.notify_members && self.backup_complete
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloseYearFormError {
    #[error("complete the year-end checklist before closing the year")]
    ChecklistIncomplete,
}

/// Draft state of the close-year dialog.
///
/// Owns its own carry-over intent rather than borrowing the start-new-year
/// form's draft value.
#[derive(Clone, Debug, PartialEq)]
pub struct CloseYearForm {
    pub checklist: CloseYearChecklist,
    /// Present in the backend contract but not wired to any input yet, so the
    /// request always carries it empty.
    pub notes: String,
    pub carry_over_members: bool,
}

impl Default for CloseYearForm {
    fn default() -> Self {
        Self {
            checklist: CloseYearChecklist::default(),
            notes: String::new(),
            carry_over_members: true,
        }
    }
}

impl CloseYearForm {
    /// Clears the checklist after a successful close; the carry-over default
    /// is restored as well.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl TryFrom<&CloseYearForm> for CloseYearRequest {
    type Error = CloseYearFormError;

    fn try_from(form: &CloseYearForm) -> Result<Self, Self::Error> {
        if !form.checklist.all_confirmed() {
            return Err(CloseYearFormError::ChecklistIncomplete);
        }
        Ok(CloseYearRequest {
            notes: form.notes.clone(),
            carry_over_members: form.carry_over_members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_gate_requires_all_four_flags() {
        let mut checklist = CloseYearChecklist::default();
        assert!(!checklist.all_confirmed());

        checklist.export_data = true;
        checklist.verify_amounts = true;
        checklist.notify_members = true;
        assert!(!checklist.all_confirmed());

        checklist.backup_complete = true;
        assert!(checklist.all_confirmed());
    }

    #[test]
    fn incomplete_checklist_blocks_request_conversion() {
        let form = CloseYearForm::default();
        assert_eq!(
            CloseYearRequest::try_from(&form),
            Err(CloseYearFormError::ChecklistIncomplete)
        );
    }

    #[test]
    fn confirmed_form_converts_with_empty_notes() {
        let mut form = CloseYearForm::default();
        form.checklist = CloseYearChecklist {
            export_data: true,
            verify_amounts: true,
            notify_members: true,
            backup_complete: true,
        };
        form.carry_over_members = false;

        let request = CloseYearRequest::try_from(&form).expect("checklist complete");
        assert_eq!(request.notes, "");
        assert!(!request.carry_over_members);
    }
}

use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::api::StartNewYearRequest;
use crate::domain::types::RotaractYear;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartNewYearFormError {
    #[error("enter a Rotaract year before starting a new year")]
    MissingYear,
    #[error("Rotaract year must look like 2026-2027")]
    InvalidYearShape,
}

/// Draft state of the start-new-year dialog.
#[derive(Clone, Debug, Deserialize, Validate, PartialEq)]
pub struct StartNewYearForm {
    /// Label of the year to establish, expected shape `YYYY-YYYY`.
    #[validate(
        length(min = 1, message = "enter a Rotaract year before starting a new year"),
        custom(function = validate_year_span)
    )]
    pub new_year: String,
    /// Rotary International theme for the new year.
    #[serde(default)]
    pub theme: String,
    /// Seed the new roster from the previous year's active membership.
    #[serde(default = "default_true")]
    pub carry_over_members: bool,
    /// Kept for display parity with the settings screen; the backend derives
    /// contribution resets from the year transition itself.
    #[serde(default = "default_true")]
    pub reset_contributions: bool,
}

fn default_true() -> bool {
    true
}

fn validate_year_span(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || RotaractYear::is_year_span(value.trim()) {
        return Ok(());
    }
    Err(ValidationError::new("year_span")
        .with_message(Cow::Borrowed("Rotaract year must look like 2026-2027")))
}

impl Default for StartNewYearForm {
    fn default() -> Self {
        Self {
            new_year: String::new(),
            theme: String::new(),
            carry_over_members: true,
            reset_contributions: true,
        }
    }
}

impl StartNewYearForm {
    /// Clears the draft after a successful start.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl TryFrom<&StartNewYearForm> for StartNewYearRequest {
    type Error = StartNewYearFormError;

    /// Local validation gate: rejected drafts never reach the backend.
    fn try_from(form: &StartNewYearForm) -> Result<Self, Self::Error> {
        if form.new_year.trim().is_empty() {
            return Err(StartNewYearFormError::MissingYear);
        }
        form.validate()
            .map_err(|_| StartNewYearFormError::InvalidYearShape)?;
        let new_year = RotaractYear::new(form.new_year.as_str())
            .map_err(|_| StartNewYearFormError::MissingYear)?;
        Ok(StartNewYearRequest {
            new_year,
            theme: form.theme.trim().to_string(),
            carry_over_members: form.carry_over_members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_year_is_rejected_locally() {
        let form = StartNewYearForm::default();
        assert_eq!(
            StartNewYearRequest::try_from(&form),
            Err(StartNewYearFormError::MissingYear)
        );
    }

    #[test]
    fn malformed_year_is_rejected_locally() {
        let form = StartNewYearForm {
            new_year: "next year".to_string(),
            ..Default::default()
        };
        assert_eq!(
            StartNewYearRequest::try_from(&form),
            Err(StartNewYearFormError::InvalidYearShape)
        );
    }

    #[test]
    fn valid_form_converts_to_request() {
        let form = StartNewYearForm {
            new_year: " 2026-2027 ".to_string(),
            theme: "Serve to Change Lives".to_string(),
            carry_over_members: false,
            reset_contributions: true,
        };

        let request = StartNewYearRequest::try_from(&form).expect("valid form");
        assert_eq!(request.new_year, "2026-2027");
        assert_eq!(request.theme, "Serve to Change Lives");
        assert!(!request.carry_over_members);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = StartNewYearForm {
            new_year: "2026-2027".to_string(),
            theme: "Theme".to_string(),
            carry_over_members: false,
            reset_contributions: false,
        };
        form.reset();
        assert_eq!(form, StartNewYearForm::default());
    }
}

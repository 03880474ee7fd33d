//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty labels, trimmed input)
//! so that once a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Label of one Rotaract operating year, e.g. `"2025-2026"`.
///
/// The label is the sole key partitioning all financial and membership data.
/// Archived years commonly use the `YYYY-YYYY` span form, but the last-resort
/// calendar fallback produces a bare 4-digit year, so the type only requires a
/// trimmed, non-empty string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RotaractYear(String);

impl RotaractYear {
    /// Trims the label and rejects empty input.
    pub fn new<S: Into<String>>(label: S) -> Result<Self, TypeConstraintError> {
        let trimmed = label.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Last-resort label: the current calendar year as a 4-digit string.
    #[must_use]
    pub fn current_calendar() -> Self {
        Self(Utc::now().year().to_string())
    }

    /// Returns `true` when the label follows the `YYYY-YYYY` span shape.
    #[must_use]
    pub fn is_year_span(label: &str) -> bool {
        let Some((start, end)) = label.split_once('-') else {
            return false;
        };
        start.len() == 4
            && end.len() == 4
            && start.chars().all(|c| c.is_ascii_digit())
            && end.chars().all(|c| c.is_ascii_digit())
    }

    /// Borrow the label as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for RotaractYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RotaractYear {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RotaractYear {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<str> for RotaractYear {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RotaractYear {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

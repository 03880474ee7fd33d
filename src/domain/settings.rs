use serde::{Deserialize, Serialize};

use crate::domain::types::RotaractYear;

/// Global club settings record.
///
/// Only the fields the rollover workflow consumes are modeled; the backend
/// returns more and unknown fields are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubSettings {
    pub club_name: Option<String>,
    pub current_rotaract_year: Option<RotaractYear>,
    pub current_theme: Option<String>,
}

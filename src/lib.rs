pub mod api;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod services;

/// Filename prefix used when saving year-level financial report exports.
pub const FINANCIAL_REPORT_PREFIX: &str = "financial-report";

/// Fallback filename for archive files that carry no name of their own.
pub const UNNAMED_ARCHIVE_FILE: &str = "archive-file";

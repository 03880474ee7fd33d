//! Domain aggregates of the year-end rollover workflow.

pub mod archive;
pub mod dashboard;
pub mod report;
pub mod settings;
pub mod types;

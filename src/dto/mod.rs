//! Resolved view types handed from services to the presentation layer.

pub mod year_state;

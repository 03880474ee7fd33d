//! Draft state behind the two year-transition dialogs.
//!
//! Each dialog owns its form in full; neither reaches into the other's draft
//! state. Forms reset after a successful submission and are preserved after a
//! failed one so the user can correct and resubmit without retyping.

pub mod close_year;
pub mod start_new_year;

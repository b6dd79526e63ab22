//! Calculation logic for the Raise Eligibility Engine.
//!
//! This module computes the next raise date for a single employee and runs
//! that computation over a roster, with upcoming-raise filtering and outcome
//! counts.

mod raise;
mod roster;

pub use raise::{RaiseEvaluation, compute_raise, evaluate_raise};
pub use roster::{RosterEntry, RosterSummary, compute_roster, summarize_roster, upcoming_raises};

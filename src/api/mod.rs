//! HTTP API module for the Raise Eligibility Engine.
//!
//! This module provides the REST API endpoints for computing next raise
//! dates for single employees and for whole rosters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RaiseRequest, RosterRequest};
pub use response::{ApiError, GradeInfo, RaiseResponse, RosterResponse};
pub use state::AppState;

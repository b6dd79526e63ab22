//! Request types for the Raise Eligibility Engine API.
//!
//! This module defines the JSON request structures for the `/raise` and
//! `/roster` endpoints. Dates are `DD/MM/YYYY` text.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::parse_day_month_year;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, RaiseInput};

/// Request body for the `/raise` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaiseRequest {
    /// The employee data the raise is computed from.
    pub employee: RaiseInput,
    /// The evaluation date; the current date when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// Request body for the `/roster` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// The employee records to evaluate.
    pub employees: Vec<EmployeeRecord>,
    /// The evaluation date; the current date when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
    /// Upcoming-raise window in months; the configured default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_months: Option<u32>,
}

/// Resolves the evaluation date of a request.
///
/// An absent or blank value means today (UTC). Any other value must be a
/// valid `DD/MM/YYYY` date.
pub(crate) fn resolve_today(today: Option<&str>) -> EngineResult<NaiveDate> {
    match today.map(str::trim).filter(|text| !text.is_empty()) {
        None => Ok(Utc::now().date_naive()),
        Some(text) => parse_day_month_year(text).ok_or_else(|| EngineError::InvalidDate {
            field: "today".to_string(),
            value: text.to_string(),
        }),
    }
}

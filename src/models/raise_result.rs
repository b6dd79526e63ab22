//! Raise computation inputs and results.
//!
//! This module contains [`RaiseInput`], the flat [`RaiseResult`] returned to
//! callers, the tagged [`RaiseDecision`] that explains it, and the audit
//! structures recorded while evaluating a raise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CoefficientValue;
use crate::dates::{format_day_month_year, serde_dmy};

/// The data one raise computation works from.
///
/// # Example
///
/// ```
/// use raise_engine::models::RaiseInput;
/// use chrono::NaiveDate;
///
/// let input = RaiseInput {
///     coefficient: Some(3.33.into()),
///     pay_grade: Some("A1".to_string()),
///     current_effective_date: NaiveDate::from_ymd_opt(2023, 11, 1),
///     retirement_date: None,
/// };
/// assert!(input.current_effective_date.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaiseInput {
    /// The current salary coefficient.
    #[serde(default)]
    pub coefficient: Option<CoefficientValue>,
    /// The pay-grade code, when the record carries one.
    #[serde(default)]
    pub pay_grade: Option<String>,
    /// The date the current coefficient took effect.
    #[serde(default, with = "serde_dmy")]
    pub current_effective_date: Option<NaiveDate>,
    /// The retirement date, if known.
    #[serde(default, with = "serde_dmy")]
    pub retirement_date: Option<NaiveDate>,
}

/// The outcome of a raise computation.
///
/// An absent date together with zero months means no further raise is due.
/// That covers missing input, the terminal step and retirement before the
/// raise; use [`RaiseDecision`] when the reason matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseResult {
    /// The date of the next raise.
    #[serde(with = "serde_dmy")]
    pub next_raise_date: Option<NaiveDate>,
    /// Full months from the evaluation date to the next raise.
    pub months_remaining: u32,
}

impl RaiseResult {
    /// The "no further raise" result.
    pub fn terminal() -> Self {
        Self {
            next_raise_date: None,
            months_remaining: 0,
        }
    }

    /// Returns true when no raise is scheduled.
    pub fn is_terminal(&self) -> bool {
        self.next_raise_date.is_none()
    }

    /// The next raise date as `DD/MM/YYYY`, or an empty string.
    pub fn next_raise_date_text(&self) -> String {
        format_day_month_year(self.next_raise_date)
    }
}

/// Why a raise computation ended the way it did.
///
/// # Example
///
/// ```
/// use raise_engine::models::{RaiseDecision, RaiseResult};
///
/// let result: RaiseResult = RaiseDecision::LastStep.into();
/// assert_eq!(result, RaiseResult::terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RaiseDecision {
    /// A raise is due on `next_raise_date`.
    Scheduled {
        /// The date of the next raise.
        #[serde(with = "serde_dmy::required")]
        next_raise_date: NaiveDate,
        /// Full months from the evaluation date to the raise.
        months_remaining: u32,
    },
    /// The coefficient is the highest step of its grade.
    LastStep,
    /// The employee retires before the raise would take effect.
    RetirementPreempts {
        /// The retirement date.
        #[serde(with = "serde_dmy::required")]
        retirement_date: NaiveDate,
        /// The raise date that would have applied.
        #[serde(with = "serde_dmy::required")]
        next_raise_date: NaiveDate,
    },
    /// No effective date, or neither coefficient nor grade.
    MissingInput,
}

impl RaiseDecision {
    /// Returns true for [`RaiseDecision::Scheduled`].
    pub fn is_scheduled(&self) -> bool {
        matches!(self, RaiseDecision::Scheduled { .. })
    }
}

impl From<RaiseDecision> for RaiseResult {
    fn from(decision: RaiseDecision) -> Self {
        match decision {
            RaiseDecision::Scheduled {
                next_raise_date,
                months_remaining,
            } => RaiseResult {
                next_raise_date: Some(next_raise_date),
                months_remaining,
            },
            RaiseDecision::LastStep
            | RaiseDecision::RetirementPreempts { .. }
            | RaiseDecision::MissingInput => RaiseResult::terminal(),
        }
    }
}

/// A single step in the audit trace recording a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The audit trace of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The steps taken, in order.
    pub steps: Vec<AuditStep>,
}

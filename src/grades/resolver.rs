//! Raise rule resolution: coefficient normalization, grade inference and
//! terminal-step detection.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use super::table::{DEFAULT_INTERVAL_MONTHS, Grade, matches_step};
use crate::models::CoefficientValue;

/// Converts a raw coefficient into a decimal.
///
/// Numbers pass through unless they are NaN or infinite. Text may use a
/// comma as decimal separator; it is converted to a dot before parsing.
/// Anything that does not parse, and any value that is not strictly
/// positive, is treated as no coefficient.
///
/// # Examples
///
/// ```
/// use raise_engine::grades::normalize_coefficient;
/// use raise_engine::models::CoefficientValue;
/// use rust_decimal::Decimal;
///
/// let text = CoefficientValue::Text("5,70".to_string());
/// assert_eq!(normalize_coefficient(&text), Some(Decimal::new(570, 2)));
///
/// let garbage = CoefficientValue::Text("n/a".to_string());
/// assert_eq!(normalize_coefficient(&garbage), None);
/// ```
pub fn normalize_coefficient(value: &CoefficientValue) -> Option<Decimal> {
    let coefficient = match value {
        CoefficientValue::Number(n) => Decimal::from_f64(*n),
        CoefficientValue::Text(text) => {
            let text = text.trim().replacen(',', ".", 1);
            Decimal::from_str(&text).ok()
        }
    };
    coefficient.filter(|c| c.is_sign_positive() && !c.is_zero())
}

/// Finds the grade whose scale contains `coefficient`.
///
/// Grades are scanned in [`Grade::ALL`] order and the first one holding a
/// step within the tolerance wins.
///
/// # Examples
///
/// ```
/// use raise_engine::grades::{infer_grade_from_coefficient, Grade};
/// use rust_decimal::Decimal;
///
/// assert_eq!(infer_grade_from_coefficient(Decimal::new(468, 2)), Some(Grade::A2_2));
/// assert_eq!(infer_grade_from_coefficient(Decimal::new(100, 2)), None);
/// ```
pub fn infer_grade_from_coefficient(coefficient: Decimal) -> Option<Grade> {
    Grade::ALL.into_iter().find(|grade| {
        grade
            .steps()
            .iter()
            .any(|step| matches_step(*step, coefficient))
    })
}

/// The grade a computation works with once the supplied code and the
/// coefficient have been considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum ResolvedGrade {
    /// A grade from the pay-grade table.
    Listed(Grade),
    /// A supplied code that is not in the table.
    Unlisted(String),
    /// No code supplied and the coefficient matched no grade.
    Unresolved,
}

impl ResolvedGrade {
    /// The table grade, if any.
    pub fn grade(&self) -> Option<Grade> {
        match self {
            ResolvedGrade::Listed(grade) => Some(*grade),
            _ => None,
        }
    }

    /// The grade code, listed or not.
    pub fn code(&self) -> Option<&str> {
        match self {
            ResolvedGrade::Listed(grade) => Some(grade.code()),
            ResolvedGrade::Unlisted(code) => Some(code),
            ResolvedGrade::Unresolved => None,
        }
    }

    /// The raise interval; grades outside the table use the default.
    pub fn interval_months(&self) -> u32 {
        self.grade()
            .map(Grade::interval_months)
            .unwrap_or(DEFAULT_INTERVAL_MONTHS)
    }
}

/// Resolves the effective grade.
///
/// A non-blank supplied code always wins, even when it is not in the table.
/// Otherwise the grade is inferred from the coefficient.
pub fn resolve_grade(coefficient: Option<Decimal>, supplied: Option<&str>) -> ResolvedGrade {
    match supplied.map(str::trim).filter(|code| !code.is_empty()) {
        Some(code) => Grade::from_code(code)
            .map(ResolvedGrade::Listed)
            .unwrap_or_else(|| ResolvedGrade::Unlisted(code.to_string())),
        None => coefficient
            .and_then(infer_grade_from_coefficient)
            .map(ResolvedGrade::Listed)
            .unwrap_or(ResolvedGrade::Unresolved),
    }
}

/// Returns true when `coefficient` is the highest step of its grade.
///
/// The grade is the supplied code, or the one inferred from the coefficient.
/// Missing coefficients, unresolved grades and codes outside the table are
/// never terminal.
///
/// # Examples
///
/// ```
/// use raise_engine::grades::is_last_step;
/// use rust_decimal::Decimal;
///
/// assert!(is_last_step(Some(Decimal::new(498, 2)), Some("A1")));
/// assert!(is_last_step(Some(Decimal::new(800, 2)), None));
/// assert!(!is_last_step(Some(Decimal::new(333, 2)), Some("A1")));
/// assert!(!is_last_step(None, Some("A1")));
/// ```
pub fn is_last_step(coefficient: Option<Decimal>, supplied: Option<&str>) -> bool {
    let Some(coefficient) = coefficient else {
        return false;
    };

    resolve_grade(Some(coefficient), supplied)
        .grade()
        .is_some_and(|grade| matches_step(grade.last_step(), coefficient))
}

/// Raise interval in months for a grade code; 36 for codes outside the table.
pub fn interval_months_for_grade(code: &str) -> u32 {
    Grade::from_code(code)
        .map(Grade::interval_months)
        .unwrap_or(DEFAULT_INTERVAL_MONTHS)
}

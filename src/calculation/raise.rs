//! Next-raise computation.
//!
//! This module turns a [`RaiseInput`] and an evaluation date into the next
//! raise date and the full months left until then. Every decision is
//! recorded as an [`AuditStep`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::dates::{add_months_clamp_end_of_month, format_day_month_year, full_months_between};
use crate::grades::{ResolvedGrade, is_last_step, normalize_coefficient, resolve_grade};
use crate::models::{AuditStep, RaiseDecision, RaiseInput, RaiseResult};

/// The full outcome of evaluating a raise.
#[derive(Debug, Clone)]
pub struct RaiseEvaluation {
    /// Why the computation ended the way it did.
    pub decision: RaiseDecision,
    /// The grade the computation used.
    pub resolved_grade: ResolvedGrade,
    /// The coefficient reached at a scheduled raise, when the current
    /// coefficient is a step of a listed grade.
    pub next_coefficient: Option<Decimal>,
    /// The audit steps recording each decision.
    pub audit_steps: Vec<AuditStep>,
}

impl RaiseEvaluation {
    /// The flat result, with all terminal decisions collapsed.
    pub fn result(&self) -> RaiseResult {
        self.decision.into()
    }
}

/// Computes the next raise date and the months remaining until it.
///
/// The computation never fails: missing or unparsable input, the terminal
/// step of a grade and a retirement that comes before the raise all give the
/// terminal result (no date, zero months). `today` is the evaluation date.
///
/// # Examples
///
/// ```
/// use raise_engine::calculation::compute_raise;
/// use raise_engine::models::RaiseInput;
/// use chrono::NaiveDate;
///
/// let input = RaiseInput {
///     coefficient: Some(3.33.into()),
///     pay_grade: Some("A1".to_string()),
///     current_effective_date: NaiveDate::from_ymd_opt(2023, 11, 1),
///     retirement_date: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();
///
/// let result = compute_raise(&input, today);
/// assert_eq!(result.next_raise_date_text(), "01/11/2026");
/// assert_eq!(result.months_remaining, 36);
/// ```
pub fn compute_raise(input: &RaiseInput, today: NaiveDate) -> RaiseResult {
    evaluate_raise(input, today).result()
}

/// Evaluates a raise and keeps the reason and the audit steps.
///
/// # Examples
///
/// ```
/// use raise_engine::calculation::evaluate_raise;
/// use raise_engine::models::{RaiseDecision, RaiseInput};
/// use chrono::NaiveDate;
///
/// let input = RaiseInput {
///     coefficient: Some("4,98".into()),
///     pay_grade: Some("A1".to_string()),
///     current_effective_date: NaiveDate::from_ymd_opt(2020, 1, 1),
///     retirement_date: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
///
/// let evaluation = evaluate_raise(&input, today);
/// assert_eq!(evaluation.decision, RaiseDecision::LastStep);
/// ```
pub fn evaluate_raise(input: &RaiseInput, today: NaiveDate) -> RaiseEvaluation {
    let mut audit = AuditRecorder::default();

    let coefficient = input.coefficient.as_ref().and_then(normalize_coefficient);
    let supplied_grade = input
        .pay_grade
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());
    let resolved_grade = resolve_grade(coefficient, supplied_grade);

    let complete = input.current_effective_date.is_some()
        && (coefficient.is_some() || supplied_grade.is_some());
    audit.record(
        "input_check",
        "Input Check",
        json!({
            "coefficient": input.coefficient,
            "pay_grade": input.pay_grade,
            "current_effective_date": format_day_month_year(input.current_effective_date),
        }),
        json!({
            "coefficient": coefficient.map(|c| c.normalize().to_string()),
            "complete": complete,
        }),
        if complete {
            "Effective date and coefficient or grade are present".to_string()
        } else {
            "Missing effective date, or both coefficient and grade are absent".to_string()
        },
    );

    let finish = |decision: RaiseDecision, audit: AuditRecorder| RaiseEvaluation {
        next_coefficient: match (decision, resolved_grade.grade(), coefficient) {
            (RaiseDecision::Scheduled { .. }, Some(grade), Some(coefficient)) => {
                grade.next_step(coefficient)
            }
            _ => None,
        },
        decision,
        resolved_grade: resolved_grade.clone(),
        audit_steps: audit.steps,
    };

    let Some(current_effective_date) = input.current_effective_date.filter(|_| complete) else {
        return finish(RaiseDecision::MissingInput, audit);
    };

    audit.record(
        "grade_resolution",
        "Grade Resolution",
        json!({
            "coefficient": coefficient.map(|c| c.normalize().to_string()),
            "pay_grade": supplied_grade,
        }),
        json!({ "resolved_grade": resolved_grade }),
        match &resolved_grade {
            ResolvedGrade::Listed(grade) if supplied_grade.is_some() => {
                format!("Using supplied grade {}", grade)
            }
            ResolvedGrade::Listed(grade) => format!("Inferred grade {} from coefficient", grade),
            ResolvedGrade::Unlisted(code) => {
                format!("Grade '{}' is not in the pay-grade table", code)
            }
            ResolvedGrade::Unresolved => "No grade matches the coefficient".to_string(),
        },
    );

    let last_step = is_last_step(coefficient, supplied_grade);
    audit.record(
        "last_step_check",
        "Last Step Check",
        json!({
            "coefficient": coefficient.map(|c| c.normalize().to_string()),
            "grade": resolved_grade.code(),
        }),
        json!({
            "last_step": last_step,
            "top_coefficient": resolved_grade.grade().map(|g| g.last_step().to_string()),
        }),
        if last_step {
            "Coefficient is the highest step of its grade - no further raise".to_string()
        } else {
            "Coefficient is below the top of its grade".to_string()
        },
    );
    if last_step {
        return finish(RaiseDecision::LastStep, audit);
    }

    let interval = resolved_grade.interval_months();
    let next_raise_date = i32::try_from(interval)
        .ok()
        .and_then(|months| add_months_clamp_end_of_month(current_effective_date, months));
    audit.record(
        "raise_interval",
        "Raise Interval",
        json!({
            "grade": resolved_grade.code(),
            "current_effective_date": format_day_month_year(Some(current_effective_date)),
        }),
        json!({
            "interval_months": interval,
            "next_raise_date": format_day_month_year(next_raise_date),
        }),
        format!(
            "{} + {} months = {}",
            format_day_month_year(Some(current_effective_date)),
            interval,
            format_day_month_year(next_raise_date)
        ),
    );
    let Some(next_raise_date) = next_raise_date else {
        return finish(RaiseDecision::MissingInput, audit);
    };

    if let Some(retirement_date) = input.retirement_date {
        let preempts = retirement_date < next_raise_date;
        audit.record(
            "retirement_check",
            "Retirement Check",
            json!({
                "retirement_date": format_day_month_year(Some(retirement_date)),
                "next_raise_date": format_day_month_year(Some(next_raise_date)),
            }),
            json!({ "retirement_precedes_raise": preempts }),
            if preempts {
                "Employee retires before the raise takes effect".to_string()
            } else {
                "Raise takes effect before retirement".to_string()
            },
        );
        if preempts {
            return finish(
                RaiseDecision::RetirementPreempts {
                    retirement_date,
                    next_raise_date,
                },
                audit,
            );
        }
    }

    let months_remaining = full_months_between(today, next_raise_date);
    audit.record(
        "months_remaining",
        "Months Remaining",
        json!({
            "today": format_day_month_year(Some(today)),
            "next_raise_date": format_day_month_year(Some(next_raise_date)),
        }),
        json!({ "months_remaining": months_remaining }),
        format!(
            "{} full months from {} to {}",
            months_remaining,
            format_day_month_year(Some(today)),
            format_day_month_year(Some(next_raise_date))
        ),
    );

    finish(
        RaiseDecision::Scheduled {
            next_raise_date,
            months_remaining,
        },
        audit,
    )
}

/// Numbers audit steps as they are recorded.
#[derive(Debug, Default)]
struct AuditRecorder {
    steps: Vec<AuditStep>,
}

impl AuditRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: Value,
        output: Value,
        reasoning: String,
    ) {
        let step_number = self.steps.len() as u32 + 1;
        self.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }
}

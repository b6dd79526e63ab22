//! Batch raise computation over employee records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::raise::evaluate_raise;
use crate::models::{EmployeeRecord, RaiseDecision, RaiseResult, SchoolLevel, TitleRank};

/// The raise outcome for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Full name.
    pub name: String,
    /// School or organizational unit.
    pub unit: String,
    /// Normalized role label, empty when the record has none.
    pub role: String,
    /// School level implied by the title code.
    pub level: Option<SchoolLevel>,
    /// Professional title rank.
    pub rank: Option<TitleRank>,
    /// The grade code the computation used, if any.
    pub grade: Option<String>,
    /// The coefficient reached at the next raise, when known.
    pub next_coefficient: Option<Decimal>,
    /// The flat raise result.
    pub result: RaiseResult,
    /// Why the computation ended the way it did.
    pub decision: RaiseDecision,
}

/// Counts of raise outcomes across a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Number of employees evaluated.
    pub total: usize,
    /// Employees with a raise scheduled.
    pub scheduled: usize,
    /// Employees at the highest step of their grade.
    pub last_step: usize,
    /// Employees retiring before their next raise.
    pub retirement_preempted: usize,
    /// Records missing the data needed for a raise.
    pub missing_input: usize,
    /// Employee count per role label.
    pub by_role: BTreeMap<String, usize>,
}

/// Computes the next raise for every record, keeping input order.
///
/// # Arguments
///
/// * `records` - The employee records to evaluate
/// * `today` - The evaluation date
///
/// # Returns
///
/// One [`RosterEntry`] per record.
pub fn compute_roster(records: &[EmployeeRecord], today: NaiveDate) -> Vec<RosterEntry> {
    records
        .iter()
        .map(|record| {
            let evaluation = evaluate_raise(&record.raise_input(), today);
            debug!(
                name = %record.name,
                decision = ?evaluation.decision,
                "Evaluated raise"
            );
            RosterEntry {
                name: record.name.clone(),
                unit: record.unit.clone(),
                role: record
                    .normalized_role()
                    .map(|role| role.to_string())
                    .unwrap_or_default(),
                level: record.school_level(),
                rank: record.title_rank(),
                grade: evaluation.resolved_grade.code().map(str::to_string),
                next_coefficient: evaluation.next_coefficient,
                result: evaluation.result(),
                decision: evaluation.decision,
            }
        })
        .collect()
}

/// Entries with a raise due within `window_months` full months.
///
/// Sorted by raise date, then by name.
///
/// # Example
///
/// ```
/// use raise_engine::calculation::{compute_roster, upcoming_raises};
/// use raise_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
///
/// let records: Vec<EmployeeRecord> = serde_json::from_str(r#"[
///     {"name": "B", "coefficient": 3.33, "pay_grade": "A1", "current_effective_date": "01/03/2023"},
///     {"name": "A", "coefficient": 2.46, "pay_grade": "B", "current_effective_date": "01/01/2025"}
/// ]"#).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
///
/// let roster = compute_roster(&records, today);
/// let upcoming = upcoming_raises(&roster, 6);
/// assert_eq!(upcoming.len(), 1);
/// assert_eq!(upcoming[0].name, "B");
/// ```
pub fn upcoming_raises(entries: &[RosterEntry], window_months: u32) -> Vec<&RosterEntry> {
    let mut upcoming: Vec<&RosterEntry> = entries
        .iter()
        .filter(|entry| match entry.decision {
            RaiseDecision::Scheduled {
                months_remaining, ..
            } => months_remaining <= window_months,
            _ => false,
        })
        .collect();
    upcoming.sort_by(|a, b| {
        a.result
            .next_raise_date
            .cmp(&b.result.next_raise_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}

/// Counts outcomes across a roster.
pub fn summarize_roster(entries: &[RosterEntry]) -> RosterSummary {
    let mut summary = RosterSummary {
        total: entries.len(),
        ..RosterSummary::default()
    };

    for entry in entries {
        match entry.decision {
            RaiseDecision::Scheduled { .. } => summary.scheduled += 1,
            RaiseDecision::LastStep => summary.last_step += 1,
            RaiseDecision::RetirementPreempts { .. } => summary.retirement_preempted += 1,
            RaiseDecision::MissingInput => summary.missing_input += 1,
        }
        if !entry.role.is_empty() {
            *summary.by_role.entry(entry.role.clone()).or_insert(0) += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_day_month_year;

    fn dmy(text: &str) -> NaiveDate {
        parse_day_month_year(text).unwrap()
    }

    fn create_record(
        name: &str,
        role: &str,
        coefficient: f64,
        grade: &str,
        current: &str,
        retirement: Option<&str>,
    ) -> EmployeeRecord {
        EmployeeRecord {
            name: name.to_string(),
            role: role.to_string(),
            unit: "THCS Nguyễn Du".to_string(),
            level: String::new(),
            rank: String::new(),
            rank_code: String::new(),
            coefficient: Some(coefficient.into()),
            pay_grade: Some(grade.to_string()),
            current_effective_date: parse_day_month_year(current),
            retirement_date: retirement.and_then(parse_day_month_year),
            note: String::new(),
        }
    }

    fn create_roster() -> Vec<EmployeeRecord> {
        vec![
            create_record("Nguyễn An", "Giáo viên", 3.33, "A1", "01/03/2023", None),
            create_record("Lê Bình", "Hiệu trưởng", 4.98, "A1", "01/01/2020", None),
            create_record(
                "Trần Cúc",
                "giao vien",
                4.68,
                "A2.2",
                "01/06/2023",
                Some("01/01/2025"),
            ),
            create_record("Phạm Dũng", "", 2.46, "B", "", None),
            create_record("Đỗ Em", "Phó hiệu trưởng", 2.46, "B", "01/02/2024", None),
        ]
    }

    #[test]
    fn test_compute_roster_keeps_order_and_fields() {
        let roster = compute_roster(&create_roster(), dmy("01/12/2025"));

        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].name, "Nguyễn An");
        assert_eq!(roster[0].role, "Giáo viên");
        assert_eq!(roster[0].unit, "THCS Nguyễn Du");
        assert_eq!(roster[0].grade.as_deref(), Some("A1"));
        assert_eq!(roster[0].result.next_raise_date_text(), "01/03/2026");
        assert_eq!(roster[0].result.months_remaining, 3);
        assert_eq!(roster[1].decision, RaiseDecision::LastStep);
        assert!(matches!(
            roster[2].decision,
            RaiseDecision::RetirementPreempts { .. }
        ));
        assert_eq!(roster[3].decision, RaiseDecision::MissingInput);
        assert_eq!(roster[3].role, "");
    }

    #[test]
    fn test_roster_entry_carries_title_and_next_coefficient() {
        let mut record = create_record("Võ Giang", "Giáo viên", 3.33, "A1", "01/03/2023", None);
        record.rank_code = "V.07.04.31".to_string();
        let mut ranked = create_record("Bùi Hà", "Giáo viên", 4.98, "A1", "01/01/2020", None);
        ranked.rank = "Hạng I".to_string();

        let roster = compute_roster(&[record, ranked], dmy("01/12/2025"));

        assert_eq!(roster[0].level, Some(SchoolLevel::LowerSecondary));
        assert_eq!(roster[0].rank, Some(TitleRank::II));
        assert_eq!(roster[0].next_coefficient, Some(Decimal::new(366, 2)));
        assert_eq!(roster[1].level, None);
        assert_eq!(roster[1].rank, Some(TitleRank::I));
        assert_eq!(roster[1].next_coefficient, None);
    }

    #[test]
    fn test_upcoming_raises_window_and_order() {
        let roster = compute_roster(&create_roster(), dmy("01/12/2025"));

        let upcoming = upcoming_raises(&roster, 3);
        let names: Vec<&str> = upcoming.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Đỗ Em", "Nguyễn An"]);
    }

    #[test]
    fn test_upcoming_raises_ties_sorted_by_name() {
        let records = vec![
            create_record("Zung", "", 3.33, "A1", "01/03/2023", None),
            create_record("Anh", "", 3.00, "A1", "01/03/2023", None),
        ];
        let roster = compute_roster(&records, dmy("01/01/2026"));

        let upcoming = upcoming_raises(&roster, 12);
        assert_eq!(upcoming[0].name, "Anh");
        assert_eq!(upcoming[1].name, "Zung");
    }

    #[test]
    fn test_upcoming_raises_zero_window_includes_overdue() {
        let records = vec![create_record("Overdue", "", 3.33, "A1", "01/01/2015", None)];
        let roster = compute_roster(&records, dmy("01/12/2025"));

        assert_eq!(upcoming_raises(&roster, 0).len(), 1);
    }

    #[test]
    fn test_summarize_roster() {
        let roster = compute_roster(&create_roster(), dmy("01/12/2025"));
        let summary = summarize_roster(&roster);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.scheduled, 2);
        assert_eq!(summary.last_step, 1);
        assert_eq!(summary.retirement_preempted, 1);
        assert_eq!(summary.missing_input, 1);
        assert_eq!(summary.by_role.get("Giáo viên"), Some(&2));
        assert_eq!(summary.by_role.get("Hiệu trưởng"), Some(&1));
        assert_eq!(summary.by_role.get("Phó Hiệu trưởng"), Some(&1));
        assert_eq!(summary.by_role.len(), 3);
    }

    #[test]
    fn test_empty_roster() {
        let roster = compute_roster(&[], dmy("01/12/2025"));
        assert!(roster.is_empty());
        assert_eq!(summarize_roster(&roster), RosterSummary::default());
    }
}

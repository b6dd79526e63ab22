//! Employee record model and role normalization.
//!
//! An [`EmployeeRecord`] is the normalized row handed over by the spreadsheet
//! import. It carries more than the raise computation needs; the extra
//! columns are kept so batch results can be reported per unit and role.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::title::{SchoolLevel, TitleRank, fold_vietnamese};
use super::{CoefficientValue, RaiseInput};
use crate::dates::serde_dmy;

/// The role an employee holds at their school.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Hiệu trưởng.
    Principal,
    /// Phó Hiệu trưởng.
    VicePrincipal,
    /// Tổng phụ trách Đội.
    YouthUnionLeader,
    /// Giáo viên.
    Teacher,
    /// Any other role, kept as written.
    Other(String),
}

impl Role {
    /// Normalizes free-text role names, ignoring case and diacritics.
    ///
    /// Returns `None` for blank text.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_engine::models::Role;
    ///
    /// assert_eq!(Role::from_text("PHÓ HIỆU TRƯỞNG"), Some(Role::VicePrincipal));
    /// assert_eq!(Role::from_text("Hieu truong"), Some(Role::Principal));
    /// assert_eq!(Role::from_text("Kế toán"), Some(Role::Other("Kế toán".to_string())));
    /// assert_eq!(Role::from_text("  "), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Role> {
        let folded = fold_vietnamese(text);
        if folded.is_empty() {
            return None;
        }

        // "pho hieu truong" contains "hieu truong", so it is checked first
        let role = if folded.contains("pho hieu truong") {
            Role::VicePrincipal
        } else if folded.contains("hieu truong") {
            Role::Principal
        } else if folded.contains("tpt") || folded.contains("tong phu trach") {
            Role::YouthUnionLeader
        } else if folded.contains("giao vien") {
            Role::Teacher
        } else {
            Role::Other(text.trim().to_string())
        };
        Some(role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Principal => write!(f, "Hiệu trưởng"),
            Role::VicePrincipal => write!(f, "Phó Hiệu trưởng"),
            Role::YouthUnionLeader => write!(f, "TPT Đội"),
            Role::Teacher => write!(f, "Giáo viên"),
            Role::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A normalized employee row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Full name.
    pub name: String,
    /// Role as written in the source file.
    #[serde(default)]
    pub role: String,
    /// School or organizational unit.
    #[serde(default)]
    pub unit: String,
    /// School level as written in the source file.
    #[serde(default)]
    pub level: String,
    /// Title rank as written in the source file.
    #[serde(default)]
    pub rank: String,
    /// Professional title code (mã CDNN).
    #[serde(default)]
    pub rank_code: String,
    /// Current salary coefficient.
    #[serde(default)]
    pub coefficient: Option<CoefficientValue>,
    /// Pay-grade code, when the file has one.
    #[serde(default)]
    pub pay_grade: Option<String>,
    /// The date the current coefficient took effect.
    #[serde(default, with = "serde_dmy")]
    pub current_effective_date: Option<NaiveDate>,
    /// Retirement date, if known.
    #[serde(default, with = "serde_dmy")]
    pub retirement_date: Option<NaiveDate>,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

impl EmployeeRecord {
    /// Builds the input for a raise computation from this record.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_engine::models::EmployeeRecord;
    ///
    /// let record: EmployeeRecord = serde_json::from_str(r#"{
    ///     "name": "Nguyễn Văn A",
    ///     "coefficient": "3,33",
    ///     "pay_grade": "A1",
    ///     "current_effective_date": "01/11/2023"
    /// }"#).unwrap();
    ///
    /// let input = record.raise_input();
    /// assert_eq!(input.pay_grade.as_deref(), Some("A1"));
    /// assert!(input.current_effective_date.is_some());
    /// ```
    pub fn raise_input(&self) -> RaiseInput {
        RaiseInput {
            coefficient: self.coefficient.clone(),
            pay_grade: self.pay_grade.clone(),
            current_effective_date: self.current_effective_date,
            retirement_date: self.retirement_date,
        }
    }

    /// The normalized role, if the record has one.
    pub fn normalized_role(&self) -> Option<Role> {
        Role::from_text(&self.role)
    }

    /// The title rank, read from the rank column or else the title code.
    pub fn title_rank(&self) -> Option<TitleRank> {
        TitleRank::from_text(&self.rank).or_else(|| TitleRank::from_code_suffix(&self.rank_code))
    }

    /// The school level implied by the title code.
    pub fn school_level(&self) -> Option<SchoolLevel> {
        SchoolLevel::from_title_code(&self.rank_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord {
            name: "Trần Thị B".to_string(),
            role: "Giáo viên".to_string(),
            unit: "TH Kim Đồng".to_string(),
            level: "Tiểu học".to_string(),
            rank: String::new(),
            rank_code: "V.07.03.29".to_string(),
            coefficient: Some(CoefficientValue::Number(2.67)),
            pay_grade: Some("A1".to_string()),
            current_effective_date: NaiveDate::from_ymd_opt(2022, 9, 1),
            retirement_date: None,
            note: String::new(),
        }
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"name": "Lê Văn C"}"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Lê Văn C");
        assert!(record.role.is_empty());
        assert_eq!(record.coefficient, None);
        assert_eq!(record.current_effective_date, None);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "name": "Phạm Thị D",
            "role": "Hiệu trưởng",
            "unit": "THCS Lê Lợi",
            "level": "THCS",
            "rank": "Hạng II",
            "rank_code": "V.07.04.31",
            "coefficient": 4.68,
            "pay_grade": "A2.2",
            "current_effective_date": "01/01/2020",
            "retirement_date": "15/06/2030",
            "note": "Kiêm nhiệm"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.normalized_role(), Some(Role::Principal));
        assert_eq!(record.title_rank(), Some(TitleRank::II));
        assert_eq!(record.school_level(), Some(SchoolLevel::LowerSecondary));
        assert_eq!(record.retirement_date, NaiveDate::from_ymd_opt(2030, 6, 15));
    }

    #[test]
    fn test_unparsable_dates_become_absent() {
        let json = r#"{"name": "X", "current_effective_date": "2020-01-01"}"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.current_effective_date, None);
        assert_eq!(record.raise_input().current_effective_date, None);
    }

    #[test]
    fn test_raise_input_copies_raise_fields() {
        let record = create_test_record();
        let input = record.raise_input();

        assert_eq!(input.coefficient, Some(CoefficientValue::Number(2.67)));
        assert_eq!(input.pay_grade.as_deref(), Some("A1"));
        assert_eq!(input.current_effective_date, NaiveDate::from_ymd_opt(2022, 9, 1));
        assert_eq!(input.retirement_date, None);
    }

    #[test]
    fn test_title_rank_falls_back_to_code() {
        let record = create_test_record();
        assert_eq!(record.title_rank(), Some(TitleRank::III));
    }

    #[test]
    fn test_role_normalization() {
        assert_eq!(Role::from_text("Phó hiệu trưởng"), Some(Role::VicePrincipal));
        assert_eq!(Role::from_text("hiệu trưởng"), Some(Role::Principal));
        assert_eq!(Role::from_text("TPT Đội"), Some(Role::YouthUnionLeader));
        assert_eq!(Role::from_text("Tổng phụ trách"), Some(Role::YouthUnionLeader));
        assert_eq!(Role::from_text("Giáo viên Toán"), Some(Role::Teacher));
        assert_eq!(Role::from_text(""), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::VicePrincipal.to_string(), "Phó Hiệu trưởng");
        assert_eq!(Role::Other("Bảo vệ".to_string()).to_string(), "Bảo vệ");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&Role::VicePrincipal).unwrap(),
            "\"vice_principal\""
        );
    }
}

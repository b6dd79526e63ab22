//! The civil-service pay-grade table.
//!
//! Each grade (ngạch) owns a strictly increasing scale of salary
//! coefficients and the number of months an employee stays on a step before
//! the next raise. The table is fixed reference data.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Absolute tolerance used whenever a coefficient is compared with a step.
pub const STEP_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Raise interval applied to grades that are not in the table.
pub const DEFAULT_INTERVAL_MONTHS: u32 = 36;

const fn coef(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

const B_STEPS: [Decimal; 12] = [
    coef(186),
    coef(206),
    coef(226),
    coef(246),
    coef(266),
    coef(286),
    coef(306),
    coef(326),
    coef(346),
    coef(366),
    coef(386),
    coef(406),
];

const A0_STEPS: [Decimal; 6] = [
    coef(210),
    coef(241),
    coef(272),
    coef(303),
    coef(334),
    coef(365),
];

const A1_STEPS: [Decimal; 9] = [
    coef(234),
    coef(267),
    coef(300),
    coef(333),
    coef(366),
    coef(399),
    coef(432),
    coef(465),
    coef(498),
];

const A2_2_STEPS: [Decimal; 6] = [
    coef(400),
    coef(434),
    coef(468),
    coef(502),
    coef(536),
    coef(570),
];

const A3_STEPS: [Decimal; 6] = [
    coef(620),
    coef(656),
    coef(692),
    coef(728),
    coef(764),
    coef(800),
];

/// A civil-service pay grade.
///
/// # Example
///
/// ```
/// use raise_engine::grades::Grade;
///
/// let grade: Grade = "A2.2".parse().unwrap();
/// assert_eq!(grade, Grade::A2_2);
/// assert_eq!(grade.interval_months(), 36);
/// assert_eq!(grade.code(), "A2.2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Grade B, 12 steps, raise every 24 months.
    B,
    /// Grade A0, 6 steps, raise every 36 months.
    A0,
    /// Grade A1, 9 steps, raise every 36 months.
    A1,
    /// Grade A2.2, 6 steps, raise every 36 months.
    #[serde(rename = "A2.2")]
    A2_2,
    /// Grade A3, 6 steps, raise every 48 months.
    A3,
}

impl Grade {
    /// Every grade, in the order used for coefficient inference.
    pub const ALL: [Grade; 5] = [Grade::B, Grade::A0, Grade::A1, Grade::A2_2, Grade::A3];

    /// Returns the textual code of the grade.
    pub fn code(self) -> &'static str {
        match self {
            Grade::B => "B",
            Grade::A0 => "A0",
            Grade::A1 => "A1",
            Grade::A2_2 => "A2.2",
            Grade::A3 => "A3",
        }
    }

    /// Looks up a grade by its code, ignoring ASCII case and surrounding
    /// whitespace.
    pub fn from_code(code: &str) -> Option<Grade> {
        let code = code.trim();
        Grade::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(code))
    }

    /// The ascending coefficient steps of this grade.
    pub fn steps(self) -> &'static [Decimal] {
        match self {
            Grade::B => &B_STEPS,
            Grade::A0 => &A0_STEPS,
            Grade::A1 => &A1_STEPS,
            Grade::A2_2 => &A2_2_STEPS,
            Grade::A3 => &A3_STEPS,
        }
    }

    /// Months spent on a step before the next raise.
    pub fn interval_months(self) -> u32 {
        match self {
            Grade::B => 24,
            Grade::A3 => 48,
            Grade::A0 | Grade::A1 | Grade::A2_2 => 36,
        }
    }

    /// The highest coefficient of the scale (the terminal step).
    pub fn last_step(self) -> Decimal {
        self.steps()[self.steps().len() - 1]
    }

    /// Zero-based position of `coefficient` in the scale, within
    /// [`STEP_TOLERANCE`].
    pub fn step_index(self, coefficient: Decimal) -> Option<usize> {
        self.steps()
            .iter()
            .position(|step| matches_step(*step, coefficient))
    }

    /// The coefficient reached at the next raise, or `None` on the terminal
    /// step or when `coefficient` is not a step of this grade.
    pub fn next_step(self, coefficient: Decimal) -> Option<Decimal> {
        let index = self.step_index(coefficient)?;
        self.steps().get(index + 1).copied()
    }
}

/// True when `coefficient` equals `step` within [`STEP_TOLERANCE`].
///
/// A difference too large for a `Decimal` never matches.
pub fn matches_step(step: Decimal, coefficient: Decimal) -> bool {
    step.checked_sub(coefficient)
        .is_some_and(|difference| difference.abs() <= STEP_TOLERANCE)
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::from_code(s).ok_or_else(|| EngineError::UnknownGrade {
            code: s.to_string(),
        })
    }
}

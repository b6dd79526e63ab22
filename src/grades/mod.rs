//! Pay-grade reference data and the rules resolved from it.
//!
//! # Example
//!
//! ```
//! use raise_engine::grades::{Grade, infer_grade_from_coefficient, is_last_step};
//! use rust_decimal::Decimal;
//!
//! let coefficient = Decimal::new(570, 2);
//! assert_eq!(infer_grade_from_coefficient(coefficient), Some(Grade::A2_2));
//! assert!(is_last_step(Some(coefficient), None));
//! ```

mod resolver;
mod table;

pub use resolver::{
    ResolvedGrade, infer_grade_from_coefficient, interval_months_for_grade, is_last_step,
    normalize_coefficient, resolve_grade,
};
pub use table::{DEFAULT_INTERVAL_MONTHS, Grade, STEP_TOLERANCE, matches_step};

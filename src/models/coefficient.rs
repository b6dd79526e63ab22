//! Raw salary coefficient as it arrives from imported records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A salary coefficient (hệ số) before normalization.
///
/// Spreadsheet exports hand coefficients over either as numbers or as text,
/// and text may use a comma as decimal separator. Use
/// [`normalize_coefficient`](crate::grades::normalize_coefficient) to get a
/// comparable decimal.
///
/// # Example
///
/// ```
/// use raise_engine::models::CoefficientValue;
///
/// let number: CoefficientValue = serde_json::from_str("3.33").unwrap();
/// assert_eq!(number, CoefficientValue::Number(3.33));
///
/// let text: CoefficientValue = serde_json::from_str("\"5,70\"").unwrap();
/// assert_eq!(text, CoefficientValue::Text("5,70".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoefficientValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell, with `,` or `.` as decimal separator.
    Text(String),
}

impl From<f64> for CoefficientValue {
    fn from(value: f64) -> Self {
        CoefficientValue::Number(value)
    }
}

impl From<&str> for CoefficientValue {
    fn from(value: &str) -> Self {
        CoefficientValue::Text(value.to_string())
    }
}

impl From<Decimal> for CoefficientValue {
    fn from(value: Decimal) -> Self {
        CoefficientValue::Text(value.to_string())
    }
}

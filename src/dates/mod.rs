//! Calendar helpers used by the raise computation.
//!
//! Dates cross the crate boundary as `DD/MM/YYYY` text and are handled
//! internally as [`chrono::NaiveDate`]. Only the month arithmetic the raise
//! rules need lives here: month addition with end-of-month clamping and
//! full-month counting.

mod day_month_year;
mod month_arithmetic;

pub use day_month_year::{format_day_month_year, parse_day_month_year, serde_dmy};
pub use month_arithmetic::{add_months_clamp_end_of_month, full_months_between};

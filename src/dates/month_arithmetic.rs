//! Month addition and full-month counting.

use chrono::{Datelike, Months, NaiveDate};

/// Adds whole months to a date, clamping the day to the target month.
///
/// The day of month is kept when the target month has it; otherwise the
/// result lands on the target month's last day. The result never spills
/// into the following month. `months` may be negative.
///
/// Returns `None` only when the result falls outside the range chrono can
/// represent.
///
/// # Examples
///
/// ```
/// use raise_engine::dates::add_months_clamp_end_of_month;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// assert_eq!(
///     add_months_clamp_end_of_month(jan_31, 1),
///     NaiveDate::from_ymd_opt(2023, 2, 28)
/// );
///
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(
///     add_months_clamp_end_of_month(leap_day, 12),
///     NaiveDate::from_ymd_opt(2025, 2, 28)
/// );
/// ```
pub fn add_months_clamp_end_of_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first_of_month = date.with_day(1)?;
    let step = Months::new(months.unsigned_abs());
    let target_first = if months >= 0 {
        first_of_month.checked_add_months(step)?
    } else {
        first_of_month.checked_sub_months(step)?
    };

    let last_day = last_day_of_month(target_first)?;
    target_first.with_day(date.day().min(last_day))
}

/// Last valid day of the month starting at `first_of_month`.
fn last_day_of_month(first_of_month: NaiveDate) -> Option<u32> {
    first_of_month
        .checked_add_months(Months::new(1))?
        .pred_opt()
        .map(|d| d.day())
}

/// Counts the whole calendar months elapsed from `from` to `to`.
///
/// A month only counts once the day of month of `from` has been reached in
/// the target month. Returns 0 when `to` is on or before `from`.
///
/// # Examples
///
/// ```
/// use raise_engine::dates::full_months_between;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
/// assert_eq!(full_months_between(from, to), 2);
/// assert_eq!(full_months_between(to, from), 0);
/// ```
pub fn full_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    u32::try_from(months).unwrap_or(0)
}

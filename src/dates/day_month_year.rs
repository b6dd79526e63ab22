//! `DD/MM/YYYY` parsing and formatting.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

/// Parses a `D/M/YYYY` or `DD/MM/YYYY` date.
///
/// Day and month take one or two digits, the year exactly four. Surrounding
/// whitespace is ignored. Returns `None` for empty or malformed text and for
/// dates that do not exist on the calendar.
///
/// # Examples
///
/// ```
/// use raise_engine::dates::parse_day_month_year;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_day_month_year("1/11/2023"),
///     NaiveDate::from_ymd_opt(2023, 11, 1)
/// );
/// assert_eq!(parse_day_month_year("32/13/2020"), None);
/// assert_eq!(parse_day_month_year("2023-11-01"), None);
/// ```
pub fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    if !is_digits(day, 1..=2) || !is_digits(month, 1..=2) || !is_digits(year, 4..=4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_digits(part: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// Formats a date as zero-padded `DD/MM/YYYY`, or an empty string when absent.
///
/// # Examples
///
/// ```
/// use raise_engine::dates::format_day_month_year;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 3);
/// assert_eq!(format_day_month_year(date), "03/05/2024");
/// assert_eq!(format_day_month_year(None), "");
/// ```
pub fn format_day_month_year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Serde helper for optional `DD/MM/YYYY` dates.
///
/// Absent dates serialize as `""`. Deserialization is lenient: `null`, empty
/// or unparsable text all become `None`, so a bad date in a record never
/// rejects the whole payload.
pub mod serde_dmy {
    use chrono::NaiveDate;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    use super::{format_day_month_year, parse_day_month_year};

    /// Serializes an optional date as `DD/MM/YYYY` text.
    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_day_month_year(*date))
    }

    /// Deserializes optional `DD/MM/YYYY` text.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let text: Option<String> = Option::deserialize(d)?;
        Ok(text.as_deref().and_then(parse_day_month_year))
    }

    /// Strict variant for dates that must be present.
    pub mod required {
        use chrono::NaiveDate;
        use serde::Deserialize;
        use serde::Deserializer;
        use serde::Serializer;

        use super::{format_day_month_year, parse_day_month_year};

        /// Serializes a date as `DD/MM/YYYY` text.
        pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&format_day_month_year(Some(*date)))
        }

        /// Deserializes `DD/MM/YYYY` text, rejecting anything else.
        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
            let text = String::deserialize(d)?;
            parse_day_month_year(&text).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid date '{}', expected DD/MM/YYYY", text))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_zero_padded() {
        assert_eq!(parse_day_month_year("01/11/2023"), Some(date(2023, 11, 1)));
    }

    #[test]
    fn test_parse_single_digit_day_and_month() {
        assert_eq!(parse_day_month_year("5/7/2010"), Some(date(2010, 7, 5)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_day_month_year("  15/05/2022 "), Some(date(2022, 5, 15)));
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert_eq!(parse_day_month_year(""), None);
        assert_eq!(parse_day_month_year("   "), None);
    }

    #[test]
    fn test_parse_rejects_calendar_invalid() {
        assert_eq!(parse_day_month_year("32/13/2020"), None);
        assert_eq!(parse_day_month_year("29/02/2023"), None);
        assert_eq!(parse_day_month_year("00/01/2023"), None);
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert_eq!(parse_day_month_year("29/02/2024"), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_day_month_year("2023-11-01"), None);
        assert_eq!(parse_day_month_year("01-11-2023"), None);
        assert_eq!(parse_day_month_year("01/11/23"), None);
        assert_eq!(parse_day_month_year("001/11/2023"), None);
        assert_eq!(parse_day_month_year("01/11/2023/1"), None);
        assert_eq!(parse_day_month_year("a1/11/2023"), None);
        assert_eq!(parse_day_month_year("+1/11/2023"), None);
    }

    #[test]
    fn test_format_pads_day_and_month() {
        assert_eq!(format_day_month_year(Some(date(2026, 1, 9))), "09/01/2026");
    }

    #[test]
    fn test_format_absent_is_empty() {
        assert_eq!(format_day_month_year(None), "");
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "serde_dmy")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_serde_dmy_serializes_text() {
        let holder = Holder {
            date: Some(date(2024, 5, 15)),
        };
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"date":"15/05/2024"}"#
        );
    }

    #[test]
    fn test_serde_dmy_serializes_absent_as_empty() {
        let holder = Holder { date: None };
        assert_eq!(serde_json::to_string(&holder).unwrap(), r#"{"date":""}"#);
    }

    #[test]
    fn test_serde_dmy_lenient_deserialize() {
        let ok: Holder = serde_json::from_str(r#"{"date":"1/1/2020"}"#).unwrap();
        assert_eq!(ok.date, Some(date(2020, 1, 1)));

        let bad: Holder = serde_json::from_str(r#"{"date":"not a date"}"#).unwrap();
        assert_eq!(bad.date, None);

        let null: Holder = serde_json::from_str(r#"{"date":null}"#).unwrap();
        assert_eq!(null.date, None);

        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.date, None);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct RequiredHolder {
        #[serde(with = "serde_dmy::required")]
        date: NaiveDate,
    }

    #[test]
    fn test_serde_dmy_required_round_trip() {
        let holder: RequiredHolder = serde_json::from_str(r#"{"date":"01/11/2026"}"#).unwrap();
        assert_eq!(holder.date, date(2026, 11, 1));
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"date":"01/11/2026"}"#
        );
    }

    #[test]
    fn test_serde_dmy_required_rejects_bad_text() {
        let result: Result<RequiredHolder, _> = serde_json::from_str(r#"{"date":"2026-11-01"}"#);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("expected DD/MM/YYYY"), "got: {}", message);
    }
}

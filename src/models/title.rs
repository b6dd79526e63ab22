//! Professional title classification for teaching staff.
//!
//! Title codes (mã chức danh nghề nghiệp, e.g. `V.07.03.29`) encode the
//! school level in their prefix and the title rank in their last two digits.
//! Roles and ranks also arrive as free Vietnamese text, so matching is done
//! on diacritic-folded lowercase text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The school level a title code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolLevel {
    /// Mầm non.
    Preschool,
    /// Tiểu học.
    Primary,
    /// THCS.
    LowerSecondary,
    /// THPT.
    UpperSecondary,
}

impl SchoolLevel {
    /// Infers the school level from a title code such as `V.07.04.12`.
    ///
    /// # Example
    ///
    /// ```
    /// use raise_engine::models::SchoolLevel;
    ///
    /// assert_eq!(SchoolLevel::from_title_code("v.07.03.29"), Some(SchoolLevel::Primary));
    /// assert_eq!(SchoolLevel::from_title_code("01.003"), None);
    /// ```
    pub fn from_title_code(code: &str) -> Option<SchoolLevel> {
        let code = code.to_uppercase();
        if code.contains("V.07.02") {
            Some(SchoolLevel::Preschool)
        } else if code.contains("V.07.03") {
            Some(SchoolLevel::Primary)
        } else if code.contains("V.07.04") {
            Some(SchoolLevel::LowerSecondary)
        } else if code.contains("V.07.05") {
            Some(SchoolLevel::UpperSecondary)
        } else {
            None
        }
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolLevel::Preschool => write!(f, "Mầm non"),
            SchoolLevel::Primary => write!(f, "Tiểu học"),
            SchoolLevel::LowerSecondary => write!(f, "THCS"),
            SchoolLevel::UpperSecondary => write!(f, "THPT"),
        }
    }
}

/// Professional title rank (hạng).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TitleRank {
    /// Hạng I.
    I,
    /// Hạng II.
    II,
    /// Hạng III.
    III,
}

impl TitleRank {
    /// Infers the rank from the last two digits of a title code.
    ///
    /// `.27`/`.30` are rank I, `.28`/`.31` rank II and `.29`/`.32` rank III.
    ///
    /// # Example
    ///
    /// ```
    /// use raise_engine::models::TitleRank;
    ///
    /// assert_eq!(TitleRank::from_code_suffix("V.07.03. 28"), Some(TitleRank::II));
    /// assert_eq!(TitleRank::from_code_suffix("V.07.03.10"), None);
    /// ```
    pub fn from_code_suffix(code: &str) -> Option<TitleRank> {
        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        let (_, suffix) = code.rsplit_once('.')?;
        match suffix {
            "27" | "30" => Some(TitleRank::I),
            "28" | "31" => Some(TitleRank::II),
            "29" | "32" => Some(TitleRank::III),
            _ => None,
        }
    }

    /// Reads a rank from free text such as `Hạng II`, `hang iii` or `I`.
    ///
    /// Plain numbers and date-looking text are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use raise_engine::models::TitleRank;
    ///
    /// assert_eq!(TitleRank::from_text("Hạng III"), Some(TitleRank::III));
    /// assert_eq!(TitleRank::from_text("05/07/2010"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<TitleRank> {
        let text = text.trim();
        if text.is_empty() || looks_numeric(text) || looks_like_date(text) {
            return None;
        }

        let folded = fold_vietnamese(text);
        let numerals: Vec<&str> = folded
            .split_whitespace()
            .filter(|word| *word != "hang")
            .map(|word| word.strip_prefix("hang").unwrap_or(word))
            .collect();

        [
            ("i", TitleRank::I),
            ("ii", TitleRank::II),
            ("iii", TitleRank::III),
        ]
        .into_iter()
        .find(|(numeral, _)| numerals.contains(numeral))
        .map(|(_, rank)| rank)
    }
}

impl fmt::Display for TitleRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleRank::I => write!(f, "Hạng I"),
            TitleRank::II => write!(f, "Hạng II"),
            TitleRank::III => write!(f, "Hạng III"),
        }
    }
}

fn looks_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c.is_whitespace())
}

/// `D/M/YY` through `DD-MM-YYYY`.
fn looks_like_date(text: &str) -> bool {
    let parts: Vec<&str> = text.split(['/', '-']).collect();
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    parts.len() == 3 && digits(parts[0], 1, 2) && digits(parts[1], 1, 2) && digits(parts[2], 2, 4)
}

/// Lowercases, strips Vietnamese diacritics and collapses whitespace.
pub(crate) fn fold_vietnamese(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(fold_char)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        other => other,
    }
}

//! Error types for the Raise Eligibility Engine.
//!
//! The raise computation itself is total and never fails on business data.
//! This module covers the layers around it: configuration loading, strict
//! grade-code parsing and boundary date parsing.

use thiserror::Error;

/// The main error type for the Raise Eligibility Engine.
///
/// # Example
///
/// ```
/// use raise_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay-grade code is not part of the pay-grade table.
    #[error("Unknown pay grade: {code}")]
    UnknownGrade {
        /// The code that did not match any grade.
        code: String,
    },

    /// A mandatory date could not be parsed as `DD/MM/YYYY`.
    #[error("Invalid date for '{field}': '{value}' (expected DD/MM/YYYY)")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The rejected text.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/engine.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/engine.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_grade_displays_code() {
        let error = EngineError::UnknownGrade {
            code: "A9".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown pay grade: A9");
    }

    #[test]
    fn test_invalid_date_displays_field_and_value() {
        let error = EngineError::InvalidDate {
            field: "today".to_string(),
            value: "2024-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date for 'today': '2024-01-01' (expected DD/MM/YYYY)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_grade() -> EngineResult<()> {
            Err(EngineError::UnknownGrade {
                code: "Z".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_grade()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

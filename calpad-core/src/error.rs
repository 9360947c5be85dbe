//! Error types for calpad.

use thiserror::Error;

/// Why an event draft was rejected.
///
/// Every variant is recoverable: the caller re-prompts and the event
/// collection is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Start date is required")]
    MissingStartDate,

    #[error("End date is required")]
    MissingEndDate,

    #[error("Invalid {field} '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid {field} '{value}'. Expected HH:mm (24-hour)")]
    InvalidTime { field: &'static str, value: String },

    #[error("End date cannot be before start date")]
    EndBeforeStart,

    #[error("End time cannot be before start time on a single-day event")]
    EndTimeBeforeStartTime,
}

impl ValidationError {
    /// Stable machine-readable code for this failure.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::MissingTitle => "missing-title",
            ValidationError::MissingStartDate => "missing-start-date",
            ValidationError::MissingEndDate => "missing-end-date",
            ValidationError::InvalidDate { .. } => "invalid-date",
            ValidationError::InvalidTime { .. } => "invalid-time",
            ValidationError::EndBeforeStart => "end-before-start",
            ValidationError::EndTimeBeforeStartTime => "end-time-before-start-time",
        }
    }
}

/// Errors that can occur in calpad operations.
#[derive(Error, Debug)]
pub enum CalpadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not understand the event: {0}")]
    IntentParse(String),

    #[error("Intent provider '{0}' not found in PATH")]
    IntentProviderNotInstalled(String),

    #[error("Intent provider timed out after {0}s")]
    IntentTimeout(u64),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Calendar is in read-only mode. Switch with: calpad access admin")]
    ReadOnly,

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calpad operations.
pub type CalpadResult<T> = Result<T, CalpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_are_kebab_case_codes() {
        assert_eq!(ValidationError::EndBeforeStart.reason(), "end-before-start");
        assert_eq!(ValidationError::MissingTitle.reason(), "missing-title");
        assert_eq!(
            ValidationError::InvalidTime {
                field: "start time",
                value: "25:00".into()
            }
            .reason(),
            "invalid-time"
        );
    }

    #[test]
    fn validation_converts_into_calpad_error() {
        let err: CalpadError = ValidationError::EndBeforeStart.into();
        assert!(matches!(err, CalpadError::Validation(ValidationError::EndBeforeStart)));
        assert_eq!(err.to_string(), "End date cannot be before start date");
    }
}

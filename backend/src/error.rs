//! Error types for timetable layout operations.

/// Result type for timetable layout operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for timetable layout operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Data validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Time out of range: {0}")]
    TimeOutOfRange(String),
}

impl ScheduleError {
    /// Whether this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, ScheduleError::ValidationError(_))
    }
}

use thiserror::Error;

/// Failure to format a duration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration cannot be negative: {0}")]
    Negative(i64),
}

/// Failure to turn command-line text into a number of seconds.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid duration '{input}': {source}")]
    Span {
        input: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("invalid timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("duration '{0}' does not fit in a signed 64-bit count of seconds")]
    OutOfRange(String),
}

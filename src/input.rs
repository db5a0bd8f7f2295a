use crate::error::InputError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A raw count of seconds. May be negative.
    Seconds(i64),
    /// A human span like "1h 30m" or "2days".
    Span(String),
    /// An RFC 3339 timestamp, measured up to some "now".
    Since(String),
}

impl Input {
    /// Resolves to whole seconds. `now` is only used by `Since`.
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<i64, InputError> {
        match self {
            Input::Seconds(secs) => Ok(*secs),
            Input::Span(text) => parse_span(text),
            Input::Since(text) => {
                let then = DateTime::parse_from_rfc3339(text.trim()).map_err(|source| {
                    InputError::Timestamp {
                        input: text.clone(),
                        source,
                    }
                })?;
                Ok((now - then.with_timezone(&Utc)).num_seconds())
            }
        }
    }
}

/// Accepts either a plain integer ("-5", "3662") or a humantime span ("1h 1m 2s").
pub fn parse_seconds(raw: &str) -> Result<i64, InputError> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(&['-', '+'][..]).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse::<i64>()
            .map_err(|_| InputError::OutOfRange(raw.to_string()));
    }
    parse_span(raw)
}

fn parse_span(text: &str) -> Result<i64, InputError> {
    let duration = humantime::parse_duration(text.trim()).map_err(|source| InputError::Span {
        input: text.to_string(),
        source,
    })?;
    i64::try_from(duration.as_secs()).map_err(|_| InputError::OutOfRange(text.to_string()))
}

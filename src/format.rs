use crate::error::DurationError;
use crate::models::{Breakdown, UnitCount};
use crate::units::TimeUnit;
use log::trace;

const NOW: &str = "now";
const SEPARATOR: &str = ", ";
const LAST_SEPARATOR: &str = " and ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Keep only this many of the largest units. `None` keeps all of them.
    pub max_units: Option<usize>,
}

/// Formats a number of seconds as a phrase such as "1 hour, 1 minute and 2 seconds".
///
/// Zero is rendered as "now". Negative input is rejected.
///
/// ```
/// assert_eq!(durphrase::format_duration(62).unwrap(), "1 minute and 2 seconds");
/// assert_eq!(durphrase::format_duration(0).unwrap(), "now");
/// assert!(durphrase::format_duration(-1).is_err());
/// ```
pub fn format_duration(seconds: i64) -> Result<String, DurationError> {
    format_duration_with(seconds, &FormatOptions::default())
}

pub fn format_duration_with(
    seconds: i64,
    options: &FormatOptions,
) -> Result<String, DurationError> {
    Ok(breakdown_with(seconds, options)?.phrase)
}

/// Decomposes `seconds` and formats it in one go.
pub fn breakdown(seconds: i64) -> Result<Breakdown, DurationError> {
    breakdown_with(seconds, &FormatOptions::default())
}

/// Like [`breakdown`], with `parts` cut down to `options.max_units` before the phrase is built.
pub fn breakdown_with(seconds: i64, options: &FormatOptions) -> Result<Breakdown, DurationError> {
    let total_seconds = check_non_negative(seconds)?;
    let mut parts = decompose(total_seconds);
    if let Some(max) = options.max_units {
        parts.truncate(max.max(1));
    }

    let phrase = if parts.is_empty() {
        NOW.to_string()
    } else {
        join_parts(&parts.iter().map(UnitCount::render).collect::<Vec<_>>())
    };

    Ok(Breakdown {
        total_seconds,
        parts,
        phrase,
    })
}

/// Greedy split into units, largest first. Units with a zero count are left out.
pub fn decompose(seconds: u64) -> Vec<UnitCount> {
    let mut parts = Vec::new();
    let mut remaining = seconds;

    for unit in TimeUnit::ALL {
        let count = remaining / unit.seconds();
        if count > 0 {
            parts.push(UnitCount::new(unit, count));
            remaining %= unit.seconds();
        }
    }

    trace!("decomposed {}s into {} part(s)", seconds, parts.len());
    parts
}

/// Joins fragments as "a, b and c".
pub fn join_parts(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{}{}{}", head.join(SEPARATOR), LAST_SEPARATOR, last),
    }
}

fn check_non_negative(seconds: i64) -> Result<u64, DurationError> {
    u64::try_from(seconds).map_err(|_| DurationError::Negative(seconds))
}

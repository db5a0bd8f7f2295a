use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// A fixed-size unit of time. Years are always 365 days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    /// Every unit, largest first. Decomposition walks this order.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Year,
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
    ];

    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Year => SECONDS_PER_YEAR,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Hour => SECONDS_PER_HOUR,
            TimeUnit::Minute => SECONDS_PER_MINUTE,
            TimeUnit::Second => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }

    /// Renders `count` of this unit, e.g. "1 hour" or "3 hours".
    pub fn render(self, count: u64) -> String {
        if count == 1 {
            format!("{} {}", count, self.name())
        } else {
            format!("{} {}s", count, self.name())
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

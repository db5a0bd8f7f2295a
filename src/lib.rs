//! Human-readable duration phrases.
//!
//! ```
//! use durphrase::format_duration;
//!
//! assert_eq!(format_duration(3662).unwrap(), "1 hour, 1 minute and 2 seconds");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod models;
pub mod units;

pub use error::{DurationError, InputError};
pub use format::{
    breakdown, breakdown_with, decompose, format_duration, format_duration_with, join_parts,
    FormatOptions,
};
pub use models::{Breakdown, UnitCount};
pub use units::TimeUnit;

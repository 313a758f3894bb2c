//! Time-of-day values and midnight-aware duration arithmetic.
//!
//! Furnace programs are logged as wall-clock times without a date. This
//! module turns the operator's `HH:MM` strings into [`TimeOfDay`] values and
//! measures the distance between two of them.
//!
//! ## Validation
//!
//! Parsing is strict: exactly two digits, a colon and two digits, with the
//! hour in `00..=23` and the minute in `00..=59`. Values such as `"9:30"`,
//! `"24:00"` or `"12:60"` are rejected, never clamped. Any live-editing
//! convenience belongs to the input layer, which must still hand the final
//! string to [`TimeOfDay::parse`].
//!
//! ## Examples
//!
//! ```rust
//! use furnace_report::libs::time::{minutes_between, TimeOfDay};
//!
//! let start: TimeOfDay = "22:15".parse()?;
//! let end: TimeOfDay = "01:45".parse()?;
//! assert_eq!(minutes_between(start, end), 210);
//! # Ok::<(), furnace_report::libs::error::ReportError>(())
//! ```

use super::error::ReportError;
use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day; the modulus of all time-of-day arithmetic.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A validated wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parses a strict `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidTimeFormat`] (without a field attached)
    /// for any string that is not exactly `HH:MM` with an hour up to 23 and a
    /// minute up to 59.
    pub fn parse(value: &str) -> Result<Self, ReportError> {
        let invalid = || ReportError::InvalidTimeFormat {
            field: None,
            value: value.to_string(),
        };

        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let [h1, h0, m1, m0] = digits.map(|b| u32::from(b - b'0'));
        let (hour, minute) = (h1 * 10 + h0, m1 * 10 + m0);
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight (`hour * 60 + minute`).
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hour() * 60 + self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Minutes from `start` to `end`, treating an earlier `end` as the next day.
///
/// Precondition: the real interval is shorter than 24 hours and crosses
/// midnight at most once. An `end` that is earlier than `start` on the same
/// day cannot be told apart from an overnight run and is read as the latter.
///
/// The result is always in `0..=1439`.
pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> u32 {
    let diff = end.0.signed_duration_since(start.0).num_minutes();
    let minutes = if diff < 0 { diff + MINUTES_PER_DAY } else { diff };
    // Both operands are within one day, so the value always fits
    minutes as u32
}

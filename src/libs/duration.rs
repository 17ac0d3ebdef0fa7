//! Parsing and accumulation of tracked durations.
//!
//! Time tracking exports write durations either as `H:MM` or as a bare
//! number of minutes. Both forms are normalized into a [`Duration`] whose
//! minutes component always stays below one hour.
//!
//! ```rust
//! use twlog::libs::duration::Duration;
//!
//! let mut total = Duration::parse("0:45")?;
//! total.add(Duration::parse("90")?)?;
//! assert_eq!((total.hours, total.minutes), (2, 15));
//! # Ok::<(), twlog::libs::error::ParseError>(())
//! ```

use super::error::ParseError;
use serde::Serialize;
use std::fmt;

const MINUTES_PER_HOUR: u32 = 60;
const SEPARATOR: char = ':';

/// Accumulated time as whole hours plus the remaining minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub hours: u32,
    pub minutes: u32,
}

impl Duration {
    /// Builds a normalized duration from raw components.
    ///
    /// Fails with [`ParseError::InvalidDuration`] when carrying the minutes
    /// would overflow the hours component.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ParseError> {
        let mut duration = Self { hours, minutes };
        duration.normalize()?;
        Ok(duration)
    }

    /// Parses `H:MM` or a bare minute count.
    ///
    /// Both components must be non-negative integers. Surrounding whitespace
    /// is ignored; anything else yields [`ParseError::InvalidDuration`].
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDuration(raw.to_string());
        let value = raw.trim();

        let (hours, minutes) = match value.split_once(SEPARATOR) {
            Some((hours, minutes)) => (
                hours.trim().parse::<u32>().map_err(|_| invalid())?,
                minutes.trim().parse::<u32>().map_err(|_| invalid())?,
            ),
            None => (0, value.parse::<u32>().map_err(|_| invalid())?),
        };

        Self::new(hours, minutes).map_err(|_| invalid())
    }

    /// Folds whole hours out of the minutes component.
    ///
    /// Applying it to an already normalized duration changes nothing. On
    /// overflow the duration is left untouched.
    pub fn normalize(&mut self) -> Result<(), ParseError> {
        if self.minutes >= MINUTES_PER_HOUR {
            self.hours = self
                .hours
                .checked_add(self.minutes / MINUTES_PER_HOUR)
                .ok_or_else(|| self.overflow())?;
            self.minutes %= MINUTES_PER_HOUR;
        }
        Ok(())
    }

    /// Accumulates `other` component-wise, then carries overflowing minutes.
    ///
    /// A total that does not fit is an [`ParseError::InvalidDuration`] and
    /// leaves `self` unchanged.
    pub fn add(&mut self, other: Duration) -> Result<(), ParseError> {
        let overflow = || ParseError::InvalidDuration(format!("{self} + {other}"));
        let mut sum = Self {
            hours: self.hours.checked_add(other.hours).ok_or_else(overflow)?,
            minutes: self.minutes.checked_add(other.minutes).ok_or_else(overflow)?,
        };
        sum.normalize().map_err(|_| overflow())?;
        *self = sum;
        Ok(())
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.hours) * u64::from(MINUTES_PER_HOUR) + u64::from(self.minutes)
    }

    fn overflow(&self) -> ParseError {
        ParseError::InvalidDuration(format!("{}:{:02}", self.hours, self.minutes))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}


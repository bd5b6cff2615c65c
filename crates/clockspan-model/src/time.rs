// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Clock-time instants.
//!
//! `ClockTime` is a time of day at nanosecond resolution, from `00:00:00`
//! up to and including `23:59:59.999999999`. It is the concrete instant
//! type the interval algebra of `clockspan_core` is usually used with.

use clockspan_core::math::instant::CycleInstant;
use thiserror::Error;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

/// The error returned when a clock-time component is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ClockTimeError {
    #[error("hour {0} is out of range (expected 0..=23)")]
    Hour(u32),
    #[error("minute {0} is out of range (expected 0..=59)")]
    Minute(u32),
    #[error("second {0} is out of range (expected 0..=59)")]
    Second(u32),
    #[error("nanosecond {0} is out of range (expected 0..=999999999)")]
    Nanosecond(u32),
    #[error("{0} nanoseconds since midnight exceeds one day")]
    NanosSinceMidnight(u64),
}

/// A time of day, stored as nanoseconds since midnight.
///
/// Ordering follows the clock: `MIDNIGHT` is the smallest value and `MAX`
/// the largest. As a [`CycleInstant`], `ORIGIN` is `MIDNIGHT` and `LIMIT`
/// is `MAX`.
///
/// # Examples
///
/// ```rust
/// # use clockspan_model::time::ClockTime;
///
/// let t = ClockTime::from_hms(13, 45, 7).unwrap();
/// assert_eq!(t.hour(), 13);
/// assert_eq!(t.to_string(), "13:45:07");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct ClockTime(u64);

impl ClockTime {
    /// `00:00:00`, the first instant of the day.
    pub const MIDNIGHT: Self = ClockTime(0);
    /// `12:00:00`.
    pub const NOON: Self = ClockTime(12 * NANOS_PER_HOUR);
    /// `23:59:59.999999999`, the last instant of the day.
    pub const MAX: Self = ClockTime(NANOS_PER_DAY - 1);

    /// Creates a time from hour, minute and second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_model::time::{ClockTime, ClockTimeError};
    ///
    /// assert!(ClockTime::from_hms(23, 59, 59).is_ok());
    /// assert_eq!(ClockTime::from_hms(24, 0, 0), Err(ClockTimeError::Hour(24)));
    /// ```
    #[inline]
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, ClockTimeError> {
        Self::from_hms_nano(hour, minute, second, 0)
    }

    /// Creates a time from hour, minute, second and nanosecond.
    pub fn from_hms_nano(
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self, ClockTimeError> {
        let err = if hour > 23 {
            Some(ClockTimeError::Hour(hour))
        } else if minute > 59 {
            Some(ClockTimeError::Minute(minute))
        } else if second > 59 {
            Some(ClockTimeError::Second(second))
        } else if u64::from(nanosecond) >= NANOS_PER_SECOND {
            Some(ClockTimeError::Nanosecond(nanosecond))
        } else {
            None
        };

        if let Some(err) = err {
            log::trace!("rejected clock time {hour}:{minute}:{second}.{nanosecond}: {err}");
            return Err(err);
        }

        Ok(ClockTime(
            u64::from(hour) * NANOS_PER_HOUR
                + u64::from(minute) * NANOS_PER_MINUTE
                + u64::from(second) * NANOS_PER_SECOND
                + u64::from(nanosecond),
        ))
    }

    /// Creates a time from nanoseconds elapsed since midnight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_model::time::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_nanos_since_midnight(0), Ok(ClockTime::MIDNIGHT));
    /// assert!(ClockTime::from_nanos_since_midnight(86_400_000_000_000).is_err());
    /// ```
    #[inline]
    pub fn from_nanos_since_midnight(nanos: u64) -> Result<Self, ClockTimeError> {
        if nanos < NANOS_PER_DAY {
            Ok(ClockTime(nanos))
        } else {
            log::trace!("rejected clock time: {nanos} nanoseconds since midnight");
            Err(ClockTimeError::NanosSinceMidnight(nanos))
        }
    }

    /// Creates the time at the start of the given hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_model::time::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_hour(5).to_string(), "05:00:00");
    /// ```
    #[inline]
    pub const fn from_hour(hour: u32) -> Self {
        assert!(hour < 24, "called `ClockTime::from_hour` with an hour above 23");
        ClockTime(hour as u64 * NANOS_PER_HOUR)
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        (self.0 / NANOS_PER_HOUR) as u32
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        (self.0 % NANOS_PER_HOUR / NANOS_PER_MINUTE) as u32
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        (self.0 % NANOS_PER_MINUTE / NANOS_PER_SECOND) as u32
    }

    #[inline]
    pub const fn nanosecond(&self) -> u32 {
        (self.0 % NANOS_PER_SECOND) as u32
    }

    /// Returns the raw nanoseconds since midnight.
    #[inline]
    pub const fn nanos_since_midnight(&self) -> u64 {
        self.0
    }
}

impl CycleInstant for ClockTime {
    const ORIGIN: Self = ClockTime::MIDNIGHT;
    const LIMIT: Self = ClockTime::MAX;
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.nanosecond() != 0 {
            write!(f, ".{:09}", self.nanosecond())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClockTime({})", self)
    }
}

impl TryFrom<u64> for ClockTime {
    type Error = ClockTimeError;

    #[inline]
    fn try_from(nanos: u64) -> Result<Self, Self::Error> {
        ClockTime::from_nanos_since_midnight(nanos)
    }
}

impl From<ClockTime> for u64 {
    #[inline]
    fn from(time: ClockTime) -> Self {
        time.0
    }
}

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

//! Clock-time intervals.
//!
//! Aliases binding the generic interval algebra of `clockspan_core` to
//! [`ClockTime`]. Opening hours such as `09:00–17:00` are `Bounded`, a night
//! shift such as `22:00–06:00` is `Wrapping`, and an always-open window is
//! `Unbounded`.
//!
//! ```rust
//! use clockspan_model::{period::ClockInterval, time::ClockTime};
//!
//! let night = ClockInterval::from_endpoints(ClockTime::from_hour(22), ClockTime::from_hour(6));
//! assert!(night.contains(ClockTime::MIDNIGHT));
//! assert!(!night.contains(ClockTime::NOON));
//! ```

use crate::time::ClockTime;
use clockspan_core::{
    error::InvalidInterval,
    math::{
        interval::Bounded,
        period::{Intersection, TimeInterval},
        unbounded::Unbounded,
        wrapping::{Piece, Wrapping},
    },
};

/// Any interval over clock times.
pub type ClockInterval = TimeInterval<ClockTime>;
/// A clock interval that does not run past midnight.
pub type ClockBounded = Bounded<ClockTime>;
/// A clock interval that runs past midnight.
pub type ClockWrapping = Wrapping<ClockTime>;
/// The whole day.
pub type ClockUnbounded = Unbounded<ClockTime>;
/// The result of intersecting two clock intervals.
pub type ClockIntersection = Intersection<ClockTime>;
/// A piece of a normalised clock interval.
pub type ClockPiece = Piece<ClockTime>;
/// The error returned for clock intervals with invalid endpoints.
pub type InvalidClockInterval = InvalidInterval<ClockTime>;


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_clock_interval_round_trip() {
        let iv = ClockInterval::from_endpoints(ClockTime::from_hour(22), ClockTime::from_hour(6));
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(
            json,
            r#"{"Wrapping":{"start":79200000000000,"end":21600000000000}}"#
        );
        let back: ClockInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);
    }

    #[test]
    fn test_out_of_range_instant_is_rejected() {
        let json = r#"{"start":0,"end":86400000000000}"#;
        assert!(serde_json::from_str::<ClockBounded>(json).is_err());
    }
}

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

//! # Cycle Interval Math
//!
//! Right-open intervals over a bounded, wrapping domain of instants and the
//! algebra over them.
//!
//! ## Submodules
//!
//! - `instant`: The `CycleInstant` trait supplying the total order and the
//!   `ORIGIN`/`LIMIT` constants of a cycle.
//! - `interval`: `Bounded`, a non-wrapping `[start, end)` interval with
//!   closed-form intersection, union and gap.
//! - `wrapping`: `Wrapping`, an interval that crosses the cycle boundary,
//!   with its exterior and its normalisation into anchored pieces.
//! - `unbounded`: `Unbounded`, the interval covering the whole cycle.
//! - `period`: `TimeInterval`, the union of the three shapes, and the
//!   intersection matrix over every pair of shapes.
//!
//! ## Motivation
//!
//! Opening hours, maintenance windows and quiet periods are routinely given
//! as clock times that may run past midnight. Keeping the three shapes apart
//! at the type level makes every wrap-around case explicit.

pub mod instant;
pub mod interval;
pub mod period;
pub mod unbounded;
pub mod wrapping;

/// Serialized form shared by every interval shape.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct Endpoints<I> {
    pub(crate) start: I,
    pub(crate) end: I,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::{
        interval::Bounded, period::TimeInterval, unbounded::Unbounded, wrapping::Wrapping,
    };

    #[test]
    fn test_bounded_round_trip() {
        let iv = Bounded::new(5u8, 10u8);
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"start":5,"end":10}"#);
        let back: Bounded<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);
    }

    #[test]
    fn test_invalid_endpoints_are_rejected() {
        assert!(serde_json::from_str::<Bounded<u8>>(r#"{"start":10,"end":5}"#).is_err());
        assert!(serde_json::from_str::<Wrapping<u8>>(r#"{"start":5,"end":10}"#).is_err());
        assert!(serde_json::from_str::<Unbounded<u8>>(r#"{"start":3,"end":4}"#).is_err());
    }

    #[test]
    fn test_unbounded_serializes_both_endpoints() {
        let json = serde_json::to_string(&Unbounded::at(3u8)).unwrap();
        assert_eq!(json, r#"{"start":3,"end":3}"#);
    }

    #[test]
    fn test_time_interval_is_tagged_by_kind() {
        let iv = TimeInterval::from_endpoints(10u8, 5u8);
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"Wrapping":{"start":10,"end":5}}"#);
        let back: TimeInterval<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iv);

        let bad = r#"{"Bounded":{"start":10,"end":5}}"#;
        assert!(serde_json::from_str::<TimeInterval<u8>>(bad).is_err());
    }
}

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

//! Construction errors.
//!
//! Interval invariants are checked exactly once, when a value is built.
//! Every other operation on an interval is total.

use crate::math::{instant::CycleInstant, period::IntervalKind};
use thiserror::Error;

/// The error returned when an endpoint pair violates the ordering invariant
/// of the requested interval variant.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::interval::Bounded;
/// # use clockspan_core::math::period::IntervalKind;
///
/// let err = Bounded::try_new(10u8, 5u8).unwrap_err();
/// assert_eq!(err.kind, IntervalKind::Bounded);
/// assert_eq!((err.start, err.end), (10, 5));
/// assert_eq!(
///     err.to_string(),
///     "invalid bounded interval: expected start < end, got start = 10, end = 5"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error(
    "invalid {kind} interval: expected {}, got start = {start:?}, end = {end:?}",
    .kind.required_relation()
)]
pub struct InvalidInterval<I> {
    /// The variant whose invariant was violated.
    pub kind: IntervalKind,
    /// The supplied start instant.
    pub start: I,
    /// The supplied end instant.
    pub end: I,
}

impl<I> InvalidInterval<I>
where
    I: CycleInstant,
{
    #[inline]
    pub(crate) fn rejected(kind: IntervalKind, start: I, end: I) -> Self {
        log::trace!(
            "rejected {} interval: start = {:?}, end = {:?}",
            kind,
            start,
            end
        );
        Self { kind, start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_required_relation() {
        let err = InvalidInterval::rejected(IntervalKind::Wrapping, 5u8, 10u8);
        assert_eq!(
            err.to_string(),
            "invalid wrapping interval: expected end < start, got start = 5, end = 10"
        );

        let err = InvalidInterval::rejected(IntervalKind::Unbounded, 3u8, 4u8);
        assert_eq!(
            err.to_string(),
            "invalid unbounded interval: expected start == end, got start = 3, end = 4"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err = InvalidInterval::rejected(IntervalKind::Bounded, 7u16, 7u16);
        assert_error(&err);
    }
}

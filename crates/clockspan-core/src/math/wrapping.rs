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

//! # Wrapping Intervals
//!
//! A right-open interval `[start, end)` measured around the cycle, i.e. the
//! set `[start, LIMIT] ∪ [ORIGIN, end)`. The invariant `end < start`
//! distinguishes it from a [`Bounded`] interval.
//!
//! ## Exterior
//!
//! The complement of a wrapping interval is the bounded interval
//! `[end, start)`, which is never empty. Reasoning about exteriors turns
//! most wrap-around questions back into ordinary bounded interval math.
//!
//! ## Normalisation
//!
//! [`Wrapping::normalise`] splits the interval into pieces anchored at the
//! cycle extremes. Degenerate pieces are reported as [`Piece::Point`]
//! markers. The marker is always `LIMIT`, also in the branch where the
//! lower piece vanishes.

use crate::{
    error::InvalidInterval,
    math::{instant::CycleInstant, interval::Bounded, period::IntervalKind},
};
use smallvec::{SmallVec, smallvec};
use std::cmp::Ordering;

/// A wrap-around interval `[start, LIMIT] ∪ [ORIGIN, end)` with `end < start`.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::wrapping::Wrapping;
///
/// let night = Wrapping::new(22u8, 6u8);
/// assert!(night.contains(23));
/// assert!(night.contains(0));
/// assert!(!night.contains(6));
/// assert!(!night.contains(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::math::Endpoints<I>",
        bound(deserialize = "I: CycleInstant + serde::Deserialize<'de>")
    )
)]
pub struct Wrapping<I>
where
    I: CycleInstant,
{
    start: I,
    end: I,
}

/// One element of a normalised wrapping interval.
///
/// A piece is either a genuine bounded interval or a bare instant marking
/// a piece that collapsed to a single point at the cycle boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece<I>
where
    I: CycleInstant,
{
    Interval(Bounded<I>),
    Point(I),
}

impl<I> Piece<I>
where
    I: CycleInstant,
{
    /// The instant this piece sorts by: the interval start, or the point itself.
    #[inline]
    pub fn start(&self) -> I {
        match self {
            Piece::Interval(iv) => iv.start(),
            Piece::Point(p) => *p,
        }
    }

    /// Compares two pieces by their start instant only.
    ///
    /// This is a pre-order: distinct pieces with the same start compare
    /// `Equal`. Use `==` to test pieces for equality.
    #[inline]
    pub fn cmp_start(&self, other: &Self) -> Ordering {
        self.start().cmp(&other.start())
    }

    /// Returns the bounded interval, if this piece is one.
    #[inline]
    pub fn as_interval(&self) -> Option<Bounded<I>> {
        match self {
            Piece::Interval(iv) => Some(*iv),
            Piece::Point(_) => None,
        }
    }
}

impl<I> From<Bounded<I>> for Piece<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Bounded<I>) -> Self {
        Piece::Interval(iv)
    }
}

impl<I> Wrapping<I>
where
    I: CycleInstant,
{
    /// Creates a new `Wrapping` interval.
    ///
    /// # Panics
    ///
    /// Panics if `end >= start`.
    #[inline]
    pub fn new(start: I, end: I) -> Self {
        assert!(
            end < start,
            "Invalid wrapping interval: end ({:?}) must be less than start ({:?})",
            end,
            start
        );
        Self { start, end }
    }

    /// Creates a new `Wrapping` interval if `end < start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::wrapping::Wrapping;
    ///
    /// assert!(Wrapping::try_new(10u8, 5u8).is_ok());
    /// assert!(Wrapping::try_new(5u8, 10u8).is_err());
    /// assert!(Wrapping::try_new(5u8, 5u8).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: I, end: I) -> Result<Self, InvalidInterval<I>> {
        if end < start {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval::rejected(IntervalKind::Wrapping, start, end))
        }
    }

    /// Creates a new `Wrapping` interval without checking the invariant in
    /// release builds.
    ///
    /// The caller must ensure `end < start`.
    #[inline]
    pub fn new_unchecked(start: I, end: I) -> Self {
        debug_assert!(
            end < start,
            "Invalid wrapping interval: end ({:?}) must be less than start ({:?})",
            end,
            start
        );
        Self { start, end }
    }

    /// Returns the inclusive start of the interval.
    #[inline]
    pub const fn start(&self) -> I {
        self.start
    }

    /// Returns the exclusive end of the interval.
    #[inline]
    pub const fn end(&self) -> I {
        self.end
    }

    /// Returns `true` if `instant >= start` or `instant < end`.
    #[inline]
    pub fn contains(&self, instant: I) -> bool {
        instant >= self.start || instant < self.end
    }

    /// Returns the complement of this interval, `[end, start)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::{interval::Bounded, wrapping::Wrapping};
    ///
    /// assert_eq!(Wrapping::new(10u8, 5u8).exterior(), Bounded::new(5, 10));
    /// ```
    #[inline]
    pub fn exterior(&self) -> Bounded<I> {
        Bounded::new_unchecked(self.end, self.start)
    }

    /// Builds the wrapping interval whose exterior is `exterior`.
    #[inline]
    pub(crate) fn from_exterior(exterior: Bounded<I>) -> Self {
        Self::new_unchecked(exterior.end(), exterior.start())
    }

    /// Splits the interval into pieces anchored at `ORIGIN` and `LIMIT`.
    ///
    /// The result is sorted ascending by start:
    ///
    /// - general case: `[Bounded(ORIGIN, end), Bounded(start, LIMIT)]`
    /// - `start == LIMIT`: `[Bounded(ORIGIN, end), Point(LIMIT)]`
    /// - `end == ORIGIN`: `[Bounded(start, LIMIT), Point(LIMIT)]`
    /// - both: `[Point(LIMIT)]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::{interval::Bounded, wrapping::{Piece, Wrapping}};
    ///
    /// let pieces = Wrapping::new(10u8, 5u8).normalise();
    /// assert_eq!(
    ///     pieces.as_slice(),
    ///     &[
    ///         Piece::Interval(Bounded::new(0, 5)),
    ///         Piece::Interval(Bounded::new(10, u8::MAX)),
    ///     ]
    /// );
    /// ```
    pub fn normalise(&self) -> SmallVec<[Piece<I>; 2]> {
        let starts_at_limit = self.start.is_limit();
        let ends_at_origin = self.end.is_origin();

        if starts_at_limit && ends_at_origin {
            log::trace!("normalise {:?}: both pieces degenerate", self);
            return smallvec![Piece::Point(I::LIMIT)];
        }

        let upper = if starts_at_limit {
            log::trace!("normalise {:?}: upper piece collapses to LIMIT", self);
            Piece::Point(I::LIMIT)
        } else {
            Piece::Interval(Bounded::new_unchecked(self.start, I::LIMIT))
        };

        // The marker is LIMIT here too; the vanished lower piece has no instant.
        let lower = if ends_at_origin {
            log::trace!("normalise {:?}: lower piece is empty", self);
            Piece::Point(I::LIMIT)
        } else {
            Piece::Interval(Bounded::new_unchecked(I::ORIGIN, self.end))
        };

        let mut pieces: SmallVec<[Piece<I>; 2]> = smallvec![lower, upper];
        pieces.sort_by(Piece::cmp_start);
        pieces
    }
}

impl<I> std::fmt::Display for Wrapping<I>
where
    I: CycleInstant + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl<I> TryFrom<crate::math::Endpoints<I>> for Wrapping<I>
where
    I: CycleInstant,
{
    type Error = InvalidInterval<I>;

    fn try_from(raw: crate::math::Endpoints<I>) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

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

//! # Time Intervals and Their Intersection
//!
//! `TimeInterval` is the closed union of the three interval shapes on a
//! cycle. Intersection is a total function over the ordered pair of shapes;
//! every one of the nine pairs is matched explicitly so that adding a shape
//! forces every pairing to be revisited.
//!
//! ## Result shapes
//!
//! | left \ right | Bounded        | Wrapping          | Unbounded |
//! |--------------|----------------|-------------------|-----------|
//! | Bounded      | empty / B      | empty / B / B+B   | left      |
//! | Wrapping     | (mirror)       | W / B+W           | left      |
//! | Unbounded    | right          | right             | left      |
//!
//! A `Two` result is always ordered ascending by start and its members are
//! separated by at least one instant.

use crate::{
    error::InvalidInterval,
    math::{
        instant::CycleInstant,
        interval::Bounded,
        unbounded::Unbounded,
        wrapping::{Piece, Wrapping},
    },
};
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{Ordering, max, min},
    ops::BitAnd,
};

/// The shape of a [`TimeInterval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalKind {
    /// `[start, end)` with `start < end`.
    Bounded,
    /// `[start, LIMIT] ∪ [ORIGIN, end)` with `end < start`.
    Wrapping,
    /// The whole cycle, `start == end`.
    Unbounded,
}

impl IntervalKind {
    /// The ordering relation the endpoints of this shape must satisfy.
    #[inline]
    pub const fn required_relation(&self) -> &'static str {
        match self {
            IntervalKind::Bounded => "start < end",
            IntervalKind::Wrapping => "end < start",
            IntervalKind::Unbounded => "start == end",
        }
    }

    /// Returns the shape an endpoint pair naturally describes.
    #[inline]
    pub fn classify<I>(start: I, end: I) -> Self
    where
        I: CycleInstant,
    {
        match start.cmp(&end) {
            Ordering::Less => IntervalKind::Bounded,
            Ordering::Greater => IntervalKind::Wrapping,
            Ordering::Equal => IntervalKind::Unbounded,
        }
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IntervalKind::Bounded => "bounded",
            IntervalKind::Wrapping => "wrapping",
            IntervalKind::Unbounded => "unbounded",
        };
        f.write_str(name)
    }
}

/// A right-open interval on the cycle.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::period::{Intersection, TimeInterval};
/// # use clockspan_core::math::{interval::Bounded, wrapping::Wrapping};
///
/// let day = TimeInterval::from(Bounded::new(3u8, 10u8));
/// let night = TimeInterval::from(Wrapping::new(7u8, 5u8));
///
/// assert_eq!(
///     day.intersect(night),
///     Intersection::Two(
///         Bounded::new(3, 5).into(),
///         Bounded::new(7, 10).into(),
///     )
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "I: CycleInstant + serde::Serialize",
        deserialize = "I: CycleInstant + serde::Deserialize<'de>"
    ))
)]
pub enum TimeInterval<I>
where
    I: CycleInstant,
{
    Bounded(Bounded<I>),
    Wrapping(Wrapping<I>),
    Unbounded(Unbounded<I>),
}

impl<I> TimeInterval<I>
where
    I: CycleInstant,
{
    /// Builds the interval an endpoint pair describes.
    ///
    /// `start < end` yields `Bounded`, `start > end` yields `Wrapping` and
    /// `start == end` yields `Unbounded`. This never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::period::{IntervalKind, TimeInterval};
    ///
    /// assert_eq!(TimeInterval::from_endpoints(5u8, 10u8).kind(), IntervalKind::Bounded);
    /// assert_eq!(TimeInterval::from_endpoints(10u8, 5u8).kind(), IntervalKind::Wrapping);
    /// assert_eq!(TimeInterval::from_endpoints(5u8, 5u8).kind(), IntervalKind::Unbounded);
    /// ```
    #[inline]
    pub fn from_endpoints(start: I, end: I) -> Self {
        match IntervalKind::classify(start, end) {
            IntervalKind::Bounded => Self::Bounded(Bounded::new_unchecked(start, end)),
            IntervalKind::Wrapping => Self::Wrapping(Wrapping::new_unchecked(start, end)),
            IntervalKind::Unbounded => Self::Unbounded(Unbounded::at(start)),
        }
    }

    /// Builds an interval of the requested shape, validating its invariant.
    #[inline]
    pub fn try_new(kind: IntervalKind, start: I, end: I) -> Result<Self, InvalidInterval<I>> {
        match kind {
            IntervalKind::Bounded => Bounded::try_new(start, end).map(Self::Bounded),
            IntervalKind::Wrapping => Wrapping::try_new(start, end).map(Self::Wrapping),
            IntervalKind::Unbounded => Unbounded::try_new(start, end).map(Self::Unbounded),
        }
    }

    #[inline]
    pub fn kind(&self) -> IntervalKind {
        match self {
            Self::Bounded(_) => IntervalKind::Bounded,
            Self::Wrapping(_) => IntervalKind::Wrapping,
            Self::Unbounded(_) => IntervalKind::Unbounded,
        }
    }

    #[inline]
    pub fn start(&self) -> I {
        match self {
            Self::Bounded(iv) => iv.start(),
            Self::Wrapping(iv) => iv.start(),
            Self::Unbounded(iv) => iv.start(),
        }
    }

    #[inline]
    pub fn end(&self) -> I {
        match self {
            Self::Bounded(iv) => iv.end(),
            Self::Wrapping(iv) => iv.end(),
            Self::Unbounded(iv) => iv.end(),
        }
    }

    /// Returns `true` if `instant` is a member of the interval.
    #[inline]
    pub fn contains(&self, instant: I) -> bool {
        match self {
            Self::Bounded(iv) => iv.contains(instant),
            Self::Wrapping(iv) => iv.contains(instant),
            Self::Unbounded(iv) => iv.contains(instant),
        }
    }

    /// Normalises a wrapping interval; other shapes return `None`.
    #[inline]
    pub fn normalise(&self) -> Option<SmallVec<[Piece<I>; 2]>> {
        match self {
            Self::Wrapping(iv) => Some(iv.normalise()),
            Self::Bounded(_) | Self::Unbounded(_) => None,
        }
    }

    /// Compares two intervals by their start instant only.
    ///
    /// This is a total pre-order, not a total order: intervals of different
    /// extent with the same start compare `Equal`. It exists to put
    /// multi-piece results into a canonical sequence and must not be used
    /// in place of `==`.
    #[inline]
    pub fn cmp_start(&self, other: &Self) -> Ordering {
        self.start().cmp(&other.start())
    }

    /// Compares this interval against a bare instant, treating the instant
    /// as a degenerate interval starting at itself.
    #[inline]
    pub fn cmp_start_instant(&self, instant: I) -> Ordering {
        self.start().cmp(&instant)
    }

    /// Intersects two intervals.
    ///
    /// The result is empty, a single interval, or two disconnected
    /// intervals. The represented set does not depend on operand order;
    /// single-interval results are identical for both orders.
    ///
    /// `Unbounded ∩ Unbounded` returns an `Unbounded` whose anchor is not
    /// specified. All unbounded values are equal, so this is unobservable
    /// through `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::period::{Intersection, TimeInterval};
    ///
    /// let a = TimeInterval::from_endpoints(5u8, 10u8);
    /// let b = TimeInterval::from_endpoints(8u8, 12u8);
    /// assert_eq!(a.intersect(b), Intersection::One(TimeInterval::from_endpoints(8, 10)));
    ///
    /// let c = TimeInterval::from_endpoints(10u8, 12u8);
    /// assert!(a.intersect(c).is_empty());
    /// ```
    pub fn intersect(&self, other: Self) -> Intersection<I> {
        match (*self, other) {
            (Self::Bounded(a), Self::Bounded(b)) => a.intersection(b).into(),
            (Self::Bounded(a), Self::Wrapping(w)) => intersect_bounded_wrapping(a, w),
            (Self::Bounded(a), Self::Unbounded(_)) => Intersection::One(Self::Bounded(a)),

            (Self::Wrapping(w), Self::Bounded(a)) => intersect_bounded_wrapping(a, w),
            (Self::Wrapping(v), Self::Wrapping(w)) => intersect_wrapping_wrapping(v, w),
            (Self::Wrapping(w), Self::Unbounded(_)) => Intersection::One(Self::Wrapping(w)),

            (Self::Unbounded(_), Self::Bounded(a)) => Intersection::One(Self::Bounded(a)),
            (Self::Unbounded(_), Self::Wrapping(w)) => Intersection::One(Self::Wrapping(w)),
            (Self::Unbounded(u), Self::Unbounded(_)) => Intersection::One(Self::Unbounded(u)),
        }
    }
}

/// `[a, b) ∩ ([c, LIMIT] ∪ [ORIGIN, d))`.
///
/// The low region `[a, min(b, d))` and the high region `[max(a, c), b)` are
/// evaluated independently; both may be present at once.
fn intersect_bounded_wrapping<I>(bounded: Bounded<I>, wrapping: Wrapping<I>) -> Intersection<I>
where
    I: CycleInstant,
{
    let (a, b) = (bounded.start(), bounded.end());
    let (c, d) = (wrapping.start(), wrapping.end());

    let low_end = min(b, d);
    let low = (a < low_end).then(|| Bounded::new_unchecked(a, low_end));

    let high_start = max(a, c);
    let high = (high_start < b).then(|| Bounded::new_unchecked(high_start, b));

    match (low, high) {
        (None, None) => Intersection::Empty,
        (Some(iv), None) | (None, Some(iv)) => Intersection::One(TimeInterval::Bounded(iv)),
        // Low ends at or before d, high starts at or after c > d: never touching.
        (Some(low), Some(high)) => {
            Intersection::pair(TimeInterval::Bounded(low), TimeInterval::Bounded(high))
        }
    }
}

/// Intersects two wrapping intervals through their exteriors.
///
/// The intersection is the complement of the union of both exteriors:
///
/// - exteriors nested, overlapping or touching: their hull is one bounded
///   interval, whose complement is a single `Wrapping`;
/// - exteriors separated: the complement is the gap between them (a
///   `Bounded`) plus everything outside both (a `Wrapping`).
///
/// Every wrapping interval contains `LIMIT`, so the result is never empty.
fn intersect_wrapping_wrapping<I>(left: Wrapping<I>, right: Wrapping<I>) -> Intersection<I>
where
    I: CycleInstant,
{
    let (ex_left, ex_right) = (left.exterior(), right.exterior());

    if let Some(hull) = ex_left.union(ex_right) {
        return Intersection::One(TimeInterval::Wrapping(Wrapping::from_exterior(hull)));
    }

    let (lower, upper) = if ex_left.start() < ex_right.start() {
        (ex_left, ex_right)
    } else {
        (ex_right, ex_left)
    };

    Intersection::pair(
        TimeInterval::Bounded(Bounded::new_unchecked(lower.end(), upper.start())),
        TimeInterval::Wrapping(Wrapping::new_unchecked(upper.end(), lower.start())),
    )
}

impl<I> BitAnd for TimeInterval<I>
where
    I: CycleInstant,
{
    type Output = Intersection<I>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<I> From<Bounded<I>> for TimeInterval<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Bounded<I>) -> Self {
        Self::Bounded(iv)
    }
}

impl<I> From<Wrapping<I>> for TimeInterval<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Wrapping<I>) -> Self {
        Self::Wrapping(iv)
    }
}

impl<I> From<Unbounded<I>> for TimeInterval<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Unbounded<I>) -> Self {
        Self::Unbounded(iv)
    }
}

impl<I> std::fmt::Display for TimeInterval<I>
where
    I: CycleInstant + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounded(iv) => std::fmt::Display::fmt(iv, f),
            Self::Wrapping(iv) => std::fmt::Display::fmt(iv, f),
            Self::Unbounded(iv) => std::fmt::Display::fmt(iv, f),
        }
    }
}

/// The outcome of intersecting two [`TimeInterval`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection<I>
where
    I: CycleInstant,
{
    /// The intervals share no instant.
    Empty,
    /// The intersection is connected.
    One(TimeInterval<I>),
    /// The intersection consists of two separated intervals, ascending by start.
    Two(TimeInterval<I>, TimeInterval<I>),
}

impl<I> Intersection<I>
where
    I: CycleInstant,
{
    #[inline]
    fn pair(a: TimeInterval<I>, b: TimeInterval<I>) -> Self {
        match a.cmp_start(&b) {
            Ordering::Greater => Self::Two(b, a),
            _ => Self::Two(a, b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of disconnected intervals in the result.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
        }
    }

    /// Returns `true` if `instant` is in any interval of the result.
    #[inline]
    pub fn contains(&self, instant: I) -> bool {
        match self {
            Self::Empty => false,
            Self::One(iv) => iv.contains(instant),
            Self::Two(a, b) => a.contains(instant) || b.contains(instant),
        }
    }

    /// Returns the interval of a connected result.
    #[inline]
    pub fn single(&self) -> Option<TimeInterval<I>> {
        match self {
            Self::One(iv) => Some(*iv),
            Self::Empty | Self::Two(_, _) => None,
        }
    }

    /// Collects the result intervals in canonical order.
    pub fn into_pieces(self) -> SmallVec<[TimeInterval<I>; 2]> {
        match self {
            Self::Empty => SmallVec::new(),
            Self::One(iv) => smallvec![iv],
            Self::Two(a, b) => smallvec![a, b],
        }
    }

    /// Returns an iterator over the result intervals.
    #[inline]
    pub fn iter(&self) -> smallvec::IntoIter<[TimeInterval<I>; 2]> {
        self.into_pieces().into_iter()
    }

    /// Compares two results as sets of intervals, ignoring the order of the
    /// members of a `Two`.
    pub fn same_set(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Two(a, b), Self::Two(c, d)) => (a == c && b == d) || (a == d && b == c),
            _ => self == other,
        }
    }
}

impl<I> From<Option<Bounded<I>>> for Intersection<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Option<Bounded<I>>) -> Self {
        match iv {
            Some(iv) => Self::One(TimeInterval::Bounded(iv)),
            None => Self::Empty,
        }
    }
}

impl<I> IntoIterator for Intersection<I>
where
    I: CycleInstant,
{
    type Item = TimeInterval<I>;
    type IntoIter = smallvec::IntoIter<[TimeInterval<I>; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_pieces().into_iter()
    }
}

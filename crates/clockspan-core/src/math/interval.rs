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

//! # Bounded Intervals
//!
//! A right-open interval `[start, end)` that does not cross the cycle
//! boundary. The invariant `start < end` makes every `Bounded` non-empty,
//! and since `end <= LIMIT` a bounded interval never contains `LIMIT`.

use crate::{
    error::InvalidInterval,
    math::{instant::CycleInstant, period::IntervalKind},
};
use std::{
    cmp::{max, min},
    ops::BitAnd,
};

/// A non-wrapping right-open interval `[start, end)` with `start < end`.
///
/// The derived `Ord` is lexicographic over `(start, end)` and is therefore
/// compatible with the start-only ordering used for canonical result order.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::interval::Bounded;
///
/// let iv = Bounded::new(5u8, 10u8);
/// assert!(iv.contains(5));
/// assert!(!iv.contains(10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::math::Endpoints<I>",
        bound(deserialize = "I: CycleInstant + serde::Deserialize<'de>")
    )
)]
pub struct Bounded<I>
where
    I: CycleInstant,
{
    start: I,
    end: I,
}

impl<I> Bounded<I>
where
    I: CycleInstant,
{
    /// Creates a new `Bounded` interval.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// let iv = Bounded::new(0u8, 10u8);
    /// assert_eq!(iv.start(), 0);
    /// ```
    #[inline]
    pub fn new(start: I, end: I) -> Self {
        assert!(
            start < end,
            "Invalid bounded interval: start ({:?}) must be less than end ({:?})",
            start,
            end
        );
        Self { start, end }
    }

    /// Creates a new `Bounded` interval if `start < end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// assert!(Bounded::try_new(5u8, 10u8).is_ok());
    /// assert!(Bounded::try_new(10u8, 5u8).is_err());
    /// assert!(Bounded::try_new(5u8, 5u8).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: I, end: I) -> Result<Self, InvalidInterval<I>> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval::rejected(IntervalKind::Bounded, start, end))
        }
    }

    /// Creates a new `Bounded` interval without checking the invariant in
    /// release builds.
    ///
    /// The caller must ensure `start < end`.
    #[inline]
    pub fn new_unchecked(start: I, end: I) -> Self {
        debug_assert!(
            start < end,
            "Invalid bounded interval: start ({:?}) must be less than end ({:?})",
            start,
            end
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

    /// Returns `true` if `instant` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// let iv = Bounded::new(0u8, 10u8);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(9));
    /// assert!(!iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, instant: I) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two intervals share at least one instant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// let a = Bounded::new(0u8, 10u8);
    /// assert!(a.intersects(Bounded::new(5, 15)));
    /// assert!(!a.intersects(Bounded::new(10, 20))); // touching
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns `true` if the intervals share a boundary but no instant.
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Returns `true` if the intervals either intersect or are adjacent,
    /// i.e. their union is a single interval.
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Calculates the intersection `[max(a, c), min(b, d))`.
    ///
    /// Returns `None` if the intervals are disjoint or merely touching.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// let a = Bounded::new(5u8, 10u8);
    /// assert_eq!(a.intersection(Bounded::new(8, 12)), Some(Bounded::new(8, 10)));
    /// assert_eq!(a.intersection(Bounded::new(10, 12)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = max(self.start, other.start);
        let new_end = min(self.end, other.end);

        if new_start < new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `None` if a gap separates them.
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects_or_adjacent(other) {
            Some(Self::new_unchecked(
                min(self.start, other.start),
                max(self.end, other.end),
            ))
        } else {
            None
        }
    }

    /// Returns the gap between two strictly separated intervals.
    ///
    /// Returns `None` if the intervals intersect or are adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clockspan_core::math::interval::Bounded;
    ///
    /// let a = Bounded::new(0u8, 5u8);
    /// let b = Bounded::new(10u8, 15u8);
    /// assert_eq!(a.gap(b), Some(Bounded::new(5, 10)));
    /// assert_eq!(b.gap(a), Some(Bounded::new(5, 10)));
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new_unchecked(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new_unchecked(other.end, self.start))
        } else {
            None
        }
    }
}

impl<I> BitAnd for Bounded<I>
where
    I: CycleInstant,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<I> std::fmt::Display for Bounded<I>
where
    I: CycleInstant + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<I> std::ops::RangeBounds<I> for Bounded<I>
where
    I: CycleInstant,
{
    fn start_bound(&self) -> std::ops::Bound<&I> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&I> {
        std::ops::Bound::Excluded(&self.end)
    }
}

impl<I> TryFrom<std::ops::Range<I>> for Bounded<I>
where
    I: CycleInstant,
{
    type Error = InvalidInterval<I>;

    #[inline]
    fn try_from(range: std::ops::Range<I>) -> Result<Self, Self::Error> {
        Self::try_new(range.start, range.end)
    }
}

impl<I> From<Bounded<I>> for std::ops::Range<I>
where
    I: CycleInstant,
{
    #[inline]
    fn from(iv: Bounded<I>) -> Self {
        std::ops::Range {
            start: iv.start,
            end: iv.end,
        }
    }
}

#[cfg(feature = "serde")]
impl<I> TryFrom<crate::math::Endpoints<I>> for Bounded<I>
where
    I: CycleInstant,
{
    type Error = InvalidInterval<I>;

    fn try_from(raw: crate::math::Endpoints<I>) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_valid() {
        let iv = Bounded::new(5u8, 10u8);
        assert_eq!(iv.start(), 5);
        assert_eq!(iv.end(), 10);
    }

    #[test]
    fn test_try_new() {
        assert!(Bounded::try_new(5u8, 10u8).is_ok());

        let err = Bounded::try_new(10u8, 5u8).unwrap_err();
        assert_eq!(err.kind, IntervalKind::Bounded);
        assert_eq!((err.start, err.end), (10, 5));

        // Empty intervals are not representable
        let err = Bounded::try_new(5u8, 5u8).unwrap_err();
        assert_eq!((err.start, err.end), (5, 5));
    }

    #[test]
    #[should_panic(expected = "Invalid bounded interval")]
    fn test_new_panic() {
        Bounded::new(10u8, 5u8);
    }

    #[test]
    #[should_panic(expected = "Invalid bounded interval")]
    fn test_new_panic_on_empty() {
        Bounded::new(5u8, 5u8);
    }

    #[test]
    fn test_contains() {
        let a = Bounded::new(3u8, 10u8);
        assert!(a.contains(3)); // Inclusive start
        assert!(a.contains(7));
        assert!(a.contains(9));
        assert!(!a.contains(10)); // Exclusive end
        assert!(!a.contains(2));
        assert!(!a.contains(u8::MAX));
    }

    #[test]
    fn test_limit_is_never_contained() {
        let a = Bounded::new(0u8, u8::MAX);
        assert!(a.contains(0));
        assert!(a.contains(u8::MAX - 1));
        assert!(!a.contains(u8::MAX));
    }

    #[test]
    fn test_contains_interval() {
        let main = Bounded::new(10u8, 20u8);

        assert!(main.contains_interval(main));
        assert!(main.contains_interval(Bounded::new(12, 18)));
        assert!(main.contains_interval(Bounded::new(10, 15)));
        assert!(main.contains_interval(Bounded::new(15, 20)));

        assert!(!main.contains_interval(Bounded::new(9, 15)));
        assert!(!main.contains_interval(Bounded::new(15, 21)));
        assert!(!main.contains_interval(Bounded::new(30, 40)));
    }

    #[test]
    fn test_intersects_and_adjacent() {
        let a = Bounded::new(10u8, 20u8);

        assert!(!a.intersects(Bounded::new(0, 10)));
        assert!(a.adjacent(Bounded::new(0, 10)));
        assert!(a.intersects_or_adjacent(Bounded::new(0, 10)));

        assert!(a.intersects(Bounded::new(15, 25)));
        assert!(!a.adjacent(Bounded::new(15, 25)));

        assert!(!a.intersects(Bounded::new(21, 30)));
        assert!(!a.adjacent(Bounded::new(21, 30)));
        assert!(!a.intersects_or_adjacent(Bounded::new(21, 30)));
    }

    #[test]
    fn test_intersection() {
        let a = Bounded::new(5u8, 10u8);

        // 1.1 No intersection
        assert_eq!(a.intersection(Bounded::new(12, 15)), None);
        // 1.2 Right intersection
        assert_eq!(a.intersection(Bounded::new(8, 12)), Some(Bounded::new(8, 10)));
        // 1.3 Left intersection
        assert_eq!(a.intersection(Bounded::new(2, 7)), Some(Bounded::new(5, 7)));
        // 1.4 Total intersection
        assert_eq!(a.intersection(a), Some(a));
        // 1.5 Right-touching
        assert_eq!(a.intersection(Bounded::new(10, 12)), None);
        // 1.6 Left-touching
        assert_eq!(a.intersection(Bounded::new(2, 5)), None);
        // Nested
        assert_eq!(a.intersection(Bounded::new(6, 8)), Some(Bounded::new(6, 8)));
    }

    #[test]
    fn test_bitand() {
        let a = Bounded::new(8u8, 10u8);
        assert_eq!(a & Bounded::new(9, 12), Some(Bounded::new(9, 10)));
        assert_eq!(a & Bounded::new(10, 12), None);
    }

    #[test]
    fn test_union() {
        let a = Bounded::new(0u8, 10u8);
        assert_eq!(a.union(Bounded::new(5, 15)), Some(Bounded::new(0, 15)));
        assert_eq!(a.union(Bounded::new(10, 20)), Some(Bounded::new(0, 20)));
        assert_eq!(a.union(Bounded::new(2, 8)), Some(a));
        assert_eq!(a.union(Bounded::new(12, 20)), None);
    }

    #[test]
    fn test_gap() {
        let a = Bounded::new(0u8, 5u8);
        assert_eq!(a.gap(Bounded::new(10, 15)), Some(Bounded::new(5, 10)));
        assert_eq!(a.gap(Bounded::new(5, 10)), None);
        assert_eq!(a.gap(Bounded::new(4, 6)), None);
    }

    #[test]
    fn test_ordering_is_by_start_first() {
        let mut v = vec![
            Bounded::new(10u8, 12u8),
            Bounded::new(0, 5),
            Bounded::new(10, 11),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![Bounded::new(0, 5), Bounded::new(10, 11), Bounded::new(10, 12)]
        );
    }

    #[test]
    fn test_traits_display_debug() {
        let a = Bounded::new(10u8, 20u8);
        assert_eq!(format!("{}", a), "[10, 20)");
        assert_eq!(format!("{:?}", a), "Bounded { start: 10, end: 20 }");
    }

    #[test]
    fn test_range_conversions() {
        let iv = Bounded::try_from(3u8..7u8).unwrap();
        assert_eq!((iv.start(), iv.end()), (3, 7));
        assert!(Bounded::try_from(7u8..3u8).is_err());

        let range: std::ops::Range<u8> = iv.into();
        assert_eq!(range, 3..7);
    }

    #[test]
    fn test_range_bounds() {
        let iv = Bounded::new(5u8, 10u8);

        match iv.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match iv.end_bound() {
            Bound::Excluded(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }

    fn bounded_u8() -> impl Strategy<Value = Bounded<u8>> {
        (any::<u8>(), any::<u8>())
            .prop_filter("start must differ from end", |(a, b)| a != b)
            .prop_map(|(a, b)| Bounded::new(a.min(b), a.max(b)))
    }

    proptest! {
        #[test]
        fn intersection_semantics(a in bounded_u8(), b in bounded_u8(), x: u8) {
            let both = a.contains(x) && b.contains(x);
            let inter = a.intersection(b).is_some_and(|iv| iv.contains(x));
            prop_assert_eq!(both, inter);
        }

        #[test]
        fn intersection_is_commutative(a in bounded_u8(), b in bounded_u8()) {
            prop_assert_eq!(a.intersection(b), b.intersection(a));
        }

        #[test]
        fn intersection_is_idempotent(a in bounded_u8()) {
            prop_assert_eq!(a.intersection(a), Some(a));
        }
    }
}

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

//! # Unbounded Intervals
//!
//! The interval covering the entire cycle. It carries the instant it was
//! built from (`start == end`), but that instant is cosmetic: every
//! `Unbounded` value denotes the same set, and all of them compare equal.

use crate::{
    error::InvalidInterval,
    math::{instant::CycleInstant, period::IntervalKind},
};
use std::hash::{Hash, Hasher};

/// The whole cycle, written `[v, v)` for some anchor instant `v`.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::unbounded::Unbounded;
///
/// let all = Unbounded::try_new(3u8, 3u8).unwrap();
/// assert!(all.contains(0));
/// assert!(all.contains(u8::MAX));
/// assert_eq!(all, Unbounded::at(200u8));
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::math::Endpoints<I>",
        into = "crate::math::Endpoints<I>",
        bound(
            serialize = "I: CycleInstant + serde::Serialize",
            deserialize = "I: CycleInstant + serde::Deserialize<'de>"
        )
    )
)]
pub struct Unbounded<I>
where
    I: CycleInstant,
{
    anchor: I,
}

impl<I> Unbounded<I>
where
    I: CycleInstant,
{
    /// Creates the unbounded interval anchored at `anchor`.
    #[inline]
    pub const fn at(anchor: I) -> Self {
        Self { anchor }
    }

    /// Creates the unbounded interval anchored at `ORIGIN`.
    #[inline]
    pub const fn full() -> Self {
        Self::at(I::ORIGIN)
    }

    /// Creates an unbounded interval from an endpoint pair.
    ///
    /// Fails unless `start == end`.
    #[inline]
    pub fn try_new(start: I, end: I) -> Result<Self, InvalidInterval<I>> {
        if start == end {
            Ok(Self::at(start))
        } else {
            Err(InvalidInterval::rejected(IntervalKind::Unbounded, start, end))
        }
    }

    /// Returns the anchor instant.
    #[inline]
    pub const fn start(&self) -> I {
        self.anchor
    }

    /// Returns the anchor instant; identical to [`Unbounded::start`].
    #[inline]
    pub const fn end(&self) -> I {
        self.anchor
    }

    /// Always `true`.
    #[inline]
    pub fn contains(&self, _instant: I) -> bool {
        true
    }
}

impl<I> Default for Unbounded<I>
where
    I: CycleInstant,
{
    #[inline]
    fn default() -> Self {
        Self::full()
    }
}

impl<I> PartialEq for Unbounded<I>
where
    I: CycleInstant,
{
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<I> Eq for Unbounded<I> where I: CycleInstant {}

impl<I> Hash for Unbounded<I>
where
    I: CycleInstant,
{
    // Consistent with `PartialEq`: every value hashes alike.
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<I> std::fmt::Display for Unbounded<I>
where
    I: CycleInstant + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.anchor, self.anchor)
    }
}

#[cfg(feature = "serde")]
impl<I> TryFrom<crate::math::Endpoints<I>> for Unbounded<I>
where
    I: CycleInstant,
{
    type Error = InvalidInterval<I>;

    fn try_from(raw: crate::math::Endpoints<I>) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

#[cfg(feature = "serde")]
impl<I> From<Unbounded<I>> for crate::math::Endpoints<I>
where
    I: CycleInstant,
{
    fn from(iv: Unbounded<I>) -> Self {
        Self {
            start: iv.anchor,
            end: iv.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_construction() {
        let u = Unbounded::try_new(3u8, 3u8).unwrap();
        assert_eq!((u.start(), u.end()), (3, 3));

        let err = Unbounded::try_new(3u8, 4u8).unwrap_err();
        assert_eq!(err.kind, IntervalKind::Unbounded);
        assert_eq!((err.start, err.end), (3, 4));
    }

    #[test]
    fn test_contains_every_instant() {
        let u = Unbounded::at(77u8);
        assert!((0..=u8::MAX).all(|x| u.contains(x)));
    }

    #[test]
    fn test_all_values_are_equal() {
        assert_eq!(Unbounded::at(0u8), Unbounded::at(255u8));
        assert_eq!(Unbounded::<u8>::full(), Unbounded::default());

        let set: HashSet<_> = [Unbounded::at(1u16), Unbounded::at(2), Unbounded::at(3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_full_is_anchored_at_origin() {
        assert_eq!(Unbounded::<u32>::full().start(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Unbounded::at(9u8).to_string(), "[9, 9)");
    }
}

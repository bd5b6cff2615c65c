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

//! # Cycle Instants
//!
//! The point type that interval endpoints are drawn from. A cycle is the
//! closed range `[ORIGIN, LIMIT]`; the instant after `LIMIT` is `ORIGIN`
//! again. Anything with a total order and two distinguished constants can
//! serve as an instant.
//!
//! All unsigned primitive integers implement `CycleInstant` with
//! `ORIGIN = 0` and `LIMIT = MAX`. `u8` in particular gives a 256-instant
//! cycle that is small enough to enumerate exhaustively.

use std::fmt::Debug;

/// A totally ordered point on a bounded, wrapping cycle.
///
/// # Contract
///
/// Implementors must guarantee `ORIGIN < LIMIT` and that every value `x`
/// of the type satisfies `ORIGIN <= x <= LIMIT`.
///
/// # Examples
///
/// ```rust
/// # use clockspan_core::math::instant::CycleInstant;
///
/// assert_eq!(<u8 as CycleInstant>::ORIGIN, 0);
/// assert_eq!(<u8 as CycleInstant>::LIMIT, 255);
/// ```
pub trait CycleInstant: Copy + Ord + Debug {
    /// The first instant of the cycle.
    const ORIGIN: Self;
    /// The last instant before the cycle repeats.
    const LIMIT: Self;

    /// Returns `true` if `self` is the cycle origin.
    #[inline]
    fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    /// Returns `true` if `self` is the last instant of the cycle.
    #[inline]
    fn is_limit(&self) -> bool {
        *self == Self::LIMIT
    }
}

macro_rules! impl_cycle_instant_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl CycleInstant for $t {
                const ORIGIN: Self = 0;
                const LIMIT: Self = <$t>::MAX;
            }
        )*
    };
}

impl_cycle_instant_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<I: CycleInstant>() -> (I, I) {
        (I::ORIGIN, I::LIMIT)
    }

    #[test]
    fn test_unsigned_bounds() {
        assert_eq!(bounds::<u8>(), (0, u8::MAX));
        assert_eq!(bounds::<u16>(), (0, u16::MAX));
        assert_eq!(bounds::<u32>(), (0, u32::MAX));
        assert_eq!(bounds::<u64>(), (0, u64::MAX));
        assert_eq!(bounds::<u128>(), (0, u128::MAX));
        assert_eq!(bounds::<usize>(), (0, usize::MAX));
    }

    #[test]
    fn test_origin_precedes_limit() {
        assert!(<u8 as CycleInstant>::ORIGIN < <u8 as CycleInstant>::LIMIT);
        assert!(<u64 as CycleInstant>::ORIGIN < <u64 as CycleInstant>::LIMIT);
    }

    #[test]
    fn test_is_origin_is_limit() {
        assert!(0u8.is_origin());
        assert!(!0u8.is_limit());
        assert!(255u8.is_limit());
        assert!(!255u8.is_origin());
        assert!(!17u8.is_origin());
        assert!(!17u8.is_limit());
    }
}

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

//! # Clockspan Core
//!
//! Interval algebra over a cyclic time-of-day domain. Intervals are
//! right-open, `[start, end)`, and come in three shapes: `Bounded` (does not
//! cross the cycle boundary), `Wrapping` (does) and `Unbounded` (covers the
//! whole cycle).
//!
//! ## Modules
//!
//! - `math`: The interval shapes, membership, normalisation of wrapping
//!   intervals into non-wrapping pieces, and intersection of any two
//!   intervals into zero, one or two intervals.
//! - `error`: `InvalidInterval`, the only error, raised when endpoints
//!   violate the ordering invariant of the requested shape.
//!
//! ## Example
//!
//! ```rust
//! use clockspan_core::math::period::{Intersection, TimeInterval};
//!
//! let office = TimeInterval::from_endpoints(3u8, 10u8);
//! let night = TimeInterval::from_endpoints(7u8, 5u8);
//!
//! let both = office.intersect(night);
//! assert_eq!(both.len(), 2);
//! assert!(both.contains(4) && both.contains(8) && !both.contains(6));
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every interval type.
//!   Deserialization validates endpoints through the fallible constructors.

pub mod error;
pub mod math;

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

//! # Clockspan Model
//!
//! Clock-time instants and the interval types built on them.
//!
//! ## Architecture
//!
//! * **`time`**: `ClockTime`, a nanosecond-resolution time of day that acts as
//!   the cycle instant (`MIDNIGHT` to `MAX`).
//! * **`period`**: Aliases binding the `clockspan_core` interval algebra to
//!   `ClockTime` (`ClockInterval`, `ClockBounded`, `ClockWrapping`, ...).
//!
//! ## Features
//!
//! * **`serde`**: `ClockTime` serializes as nanoseconds since midnight and
//!   enables the `serde` feature of `clockspan-core` for the intervals.

pub mod period;
pub mod time;

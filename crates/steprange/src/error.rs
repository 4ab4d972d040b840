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

//! # Range Errors
//!
//! The two failure modes of the range type. Everything else a caller can get
//! wrong (out-of-bounds indices, reversed or oversized slice bounds) is
//! absorbed by clamping or answered with `None`, matching ordinary sequence
//! indexing conventions, so no further error types exist.

use std::fmt::{self, Display};

/// The error returned when constructing a range with a step of zero.
///
/// A zero step would never advance from `start` toward `stop`, so the
/// progression is ill-defined. The check happens before any other
/// computation at construction time.
///
/// # Examples
///
/// ```rust
/// # use steprange::range::Range;
/// assert!(Range::try_new(0, 10, 0).is_err());
/// assert!(Range::try_new(0, 10, 2).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStepError;

impl Display for InvalidStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range step value cannot be 0")
    }
}

impl std::error::Error for InvalidStepError {}

/// The error returned when reducing an empty range without a seed value.
///
/// The unseeded [`reduce`](crate::range::Range::reduce) and
/// [`reduce_right`](crate::range::Range::reduce_right) use the first element
/// visited as the initial accumulator; an empty range has none. The seeded
/// [`fold`](crate::range::Range::fold) variants never fail.
///
/// # Examples
///
/// ```rust
/// # use steprange::range::Range;
/// let empty = Range::between(5, 5);
/// assert!(empty.reduce(|acc, e, _, _| acc + e).is_err());
/// assert_eq!(empty.fold(0, |acc, e, _, _| acc + e), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReductionError;

impl Display for EmptyReductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot reduce an empty range without an initial value")
    }
}

impl std::error::Error for EmptyReductionError {}

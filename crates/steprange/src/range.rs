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

//! # Arithmetic-Progression Ranges
//!
//! An immutable, lazily evaluated arithmetic progression `start, start+step,
//! start+2*step, ...` bounded by an exclusive `stop`. The progression is
//! never materialized: length, element lookup, slicing, and reversal are all
//! computed in O(1) from the three defining integers.
//!
//! ## Highlights
//!
//! - Three construction shapes: `to(stop)`, `between(start, stop)`, and
//!   `new(start, stop, step)` (with a fallible `try_new` twin).
//! - Negative-index element access via [`Range::at`], out-of-bounds answered
//!   with `None` rather than an error.
//! - O(1) [`Range::slice`] and [`Range::to_reversed`] that return new ranges
//!   instead of walking elements.
//! - Equality and hashing derived from the produced sequence (first element,
//!   last element, step), so ranges with different raw `stop` values compare
//!   equal when they produce the same values.
//! - Restartable iteration (`Iterator`, `DoubleEndedIterator`,
//!   `ExactSizeIterator`, `FusedIterator`) and conversions from
//!   `std::ops::Range`.
//!
//! ## Motivation
//!
//! Stepped index sequences show up constantly in numeric and scheduling code.
//! Keeping them symbolic avoids allocating what is fully described by three
//! integers, while the sequence-like protocol surface lets them drop into
//! code written against ordinary ordered collections.

use crate::error::InvalidStepError;
use num_traits::{PrimInt, Signed, ToPrimitive};
use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

/// Widens an element to `i128` for internal arithmetic.
///
/// Length and span math runs on `u128` magnitudes (`abs_diff`,
/// `unsigned_abs`) and value evaluation wraps, so even `i128` elements
/// cannot overflow mid-computation.
#[inline]
pub(crate) fn widen<T>(value: T) -> i128
where
    T: PrimInt + Signed,
{
    value
        .to_i128()
        .expect("Range: element value does not fit in i128")
}

/// Narrows an internal `i128` back to the element type.
///
/// Callers only narrow values that lie between existing range endpoints, so
/// the cast failing means the inputs themselves were not representable.
#[inline]
pub(crate) fn narrow<T>(value: i128) -> T
where
    T: PrimInt + Signed,
{
    T::from(value).expect("Range: derived value does not fit in the element type")
}

/// Number of values produced by the progression `(start, stop, step)`.
///
/// The span is taken as a `u128` magnitude, so the full `i128` domain is
/// handled exactly; only a length that does not fit `usize` panics.
fn derive_len(start: i128, stop: i128, step: i128) -> usize {
    debug_assert!(step != 0, "derive_len requires a nonzero step");
    if (step > 0 && stop < start) || (step < 0 && start < stop) {
        return 0;
    }
    let span = start.abs_diff(stop);
    let abs_step = step.unsigned_abs();
    span.div_ceil(abs_step)
        .to_usize()
        .expect("Range: length exceeds usize::MAX")
}

/// An immutable arithmetic progression `[start, stop)` advancing by `step`.
///
/// The value at logical index `i` is exactly `start + step*i` for
/// `0 <= i < len`. `stop` is an exclusive bound and is never produced. The
/// number of values is derived once at construction and frozen; there is no
/// mutation path, so a range can be shared freely.
///
/// Two ranges are equal iff they produce identical sequences: same first
/// element, same last element, and same step. The raw `stop` fields may
/// differ between equal ranges.
///
/// # Examples
///
/// ```rust
/// # use steprange::range::Range;
/// let r = Range::new(0, 5, 2);
/// assert_eq!(r.len(), 3);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 2, 4]);
/// assert_eq!(r.at(-1), Some(4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Range<T>
where
    T: PrimInt + Signed,
{
    start: T,
    stop: T,
    step: T,
    len: usize,
}

impl<T> Range<T>
where
    T: PrimInt + Signed,
{
    /// Internal constructor for a step already known to be nonzero.
    #[inline]
    fn with_len(start: T, stop: T, step: T) -> Self {
        let len = derive_len(widen(start), widen(stop), widen(step));
        Self {
            start,
            stop,
            step,
            len,
        }
    }

    /// Creates a new range from explicit `start`, `stop`, and `step` values.
    ///
    /// # Panics
    ///
    /// Panics if `step == 0`, or if the derived length does not fit in
    /// `usize` (reachable only with near-full-domain `i128` bounds).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(5, 1, -1);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![5, 4, 3, 2]);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T, step: T) -> Self {
        assert!(!step.is_zero(), "range step value cannot be 0");
        Self::with_len(start, stop, step)
    }

    /// Creates a new range if the step is valid.
    ///
    /// Returns [`InvalidStepError`] if `step == 0`. The step check precedes
    /// any other computation.
    ///
    /// # Panics
    ///
    /// Panics if the derived length does not fit in `usize` (reachable only
    /// with near-full-domain `i128` bounds).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert!(Range::try_new(0, 10, 2).is_ok());
    /// assert!(Range::try_new(0, 10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, stop: T, step: T) -> Result<Self, InvalidStepError> {
        if step.is_zero() {
            return Err(InvalidStepError);
        }
        Ok(Self::with_len(start, stop, step))
    }

    /// Creates the range `0, 1, ..., stop - 1` (the one-argument shape).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::to(5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn to(stop: T) -> Self {
        Self::with_len(T::zero(), stop, T::one())
    }

    /// Creates the range `start, start + 1, ..., stop - 1` (the two-argument
    /// shape).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::between(1, 5).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn between(start: T, stop: T) -> Self {
        Self::with_len(start, stop, T::one())
    }

    /// Returns the start value of the range.
    ///
    /// This is the first produced value unless the range is empty.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive stop bound of the range.
    ///
    /// The stop value itself is never produced.
    #[inline]
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the signed increment between consecutive values.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns the number of values the range produces.
    ///
    /// Derived once at construction; never recomputed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::new(0, 5, 2).len(), 3);
    /// assert_eq!(Range::between(3, 1).len(), 0);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the range produces no values.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value at an in-bounds logical index. Callers check bounds.
    ///
    /// An in-bounds value always fits the element type, so wrapping
    /// two's-complement evaluation is exact even at the `i128` extremes.
    #[inline]
    pub(crate) fn value_at(&self, index: usize) -> T {
        debug_assert!(index < self.len, "value_at index out of bounds");
        narrow(widen(self.start).wrapping_add(widen(self.step).wrapping_mul(index as i128)))
    }

    /// Retrieves the value at the given logical index in O(1).
    ///
    /// Negative indices count from the end (`-1` is the last value).
    /// Out-of-bounds indices yield `None`; this is absence, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(1, 10, 2);
    /// assert_eq!(r.at(2), Some(5));
    /// assert_eq!(r.at(-1), Some(9));
    /// assert_eq!(r.at(5), None);
    /// assert_eq!(r.at(-6), None);
    /// ```
    #[inline]
    pub fn at(&self, index: isize) -> Option<T> {
        let len = self.len as i128;
        let mut i = index as i128;
        if i < -len || i >= len {
            return None;
        }
        if i < 0 {
            i += len;
        }
        Some(self.value_at(i as usize))
    }

    /// Returns the first produced value, or `None` if the range is empty.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.at(0)
    }

    /// Returns the last produced value, or `None` if the range is empty.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.at(-1)
    }

    /// Translates a resolved slice bound in `[0, len]` to a range endpoint.
    ///
    /// A bound at `len` reuses the raw stop instead of `start + step*len`:
    /// the resulting range produces the same values and the endpoint is
    /// guaranteed representable in `T`.
    #[inline]
    fn slice_endpoint(&self, bound: i128) -> T {
        if bound < self.len as i128 {
            self.value_at(bound as usize)
        } else {
            self.stop
        }
    }

    /// Returns a sub-range covering logical indices `[start, stop)` in O(1).
    ///
    /// Both bounds are optional: an absent `start` defaults to `0`, an
    /// absent `stop` to the length. Negative bounds count from the end, and
    /// bounds beyond either end are clamped, matching ordinary sequence
    /// slicing. A start at or past the effective stop yields an empty range.
    /// No elements are ever walked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(1, 10, 2); // 1, 3, 5, 7, 9
    /// assert_eq!(r.slice(Some(1), Some(3)).iter().collect::<Vec<_>>(), vec![3, 5]);
    /// assert_eq!(r.slice(Some(-2), None).iter().collect::<Vec<_>>(), vec![7, 9]);
    /// assert_eq!(r.slice(Some(4), Some(2)).len(), 0);
    /// ```
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>) -> Self {
        let len = self.len as i128;
        let resolve = |bound: Option<isize>, default: i128| match bound {
            None => default,
            Some(b) => {
                let b = b as i128;
                if b < -len {
                    0
                } else if b < 0 {
                    len + b
                } else {
                    b.min(len)
                }
            }
        };
        let lo = resolve(start, 0);
        let hi = resolve(stop, len);
        Self::with_len(
            self.slice_endpoint(lo),
            self.slice_endpoint(hi),
            self.step,
        )
    }

    /// Returns a range producing the same values in reverse order, in O(1).
    ///
    /// Reversing twice yields a range equal to the original under the
    /// sequence-equality contract (the raw `stop` field may differ).
    /// Reversing an empty range returns it unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the reversed stop bound `start - step` is not representable
    /// in the element type (a `start` at the signed minimum with a positive
    /// step, or at the maximum with a negative step). The limit is inherent
    /// to the three-integer encoding: the reversed range needs an exclusive
    /// bound one step past the old first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(1, 10, 2);
    /// assert_eq!(r.to_reversed().iter().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
    /// assert_eq!(r.to_reversed().to_reversed(), r);
    /// ```
    pub fn to_reversed(&self) -> Self {
        if self.len == 0 {
            return *self;
        }
        let new_start = self.value_at(self.len - 1);
        let new_step = -self.step;
        let new_stop = self
            .start
            .checked_sub(&self.step)
            .expect("Range: reversed stop does not fit in the element type");
        Self::with_len(new_start, new_stop, new_step)
    }

    /// Creates a fresh iterator over the produced values.
    ///
    /// Iteration is restartable: every call starts a new cursor at the
    /// beginning and never consumes or mutates the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::to(3);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter {
            range: *self,
            front: 0,
            back: self.len,
        }
    }
}

/// Sequence equality: same first value, same last value, same step.
///
/// The raw `stop` field deliberately does not participate; two ranges with
/// different stops are equal whenever they produce the same values.
impl<T> PartialEq for Range<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.first() == other.first() && self.last() == other.last() && self.step == other.step
    }
}

impl<T> Eq for Range<T> where T: PrimInt + Signed {}

/// Hashes the same triple equality compares: first, last, step.
///
/// Equal ranges therefore hash identically even when their raw `stop`
/// fields differ. The `None` of an empty range acts as the sentinel.
impl<T> Hash for Range<T>
where
    T: PrimInt + Signed + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first().hash(state);
        self.last().hash(state);
        self.step.hash(state);
    }
}

impl<T> Default for Range<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn default() -> Self {
        Self::to(T::zero())
    }
}

impl<T> fmt::Display for Range<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: PrimInt + Signed,
{
    /// Converts `a..b` into the unit-step range `between(a, b)`.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::between(range.start, range.end)
    }
}

/// An iterator over the values produced by a [`Range`].
///
/// Holds a copy of the range and a pair of cursor indices; each step
/// computes `start + step*index` directly, so the sequence is never stored.
///
/// # Examples
///
/// ```rust
/// # use steprange::range::Range;
/// let mut iter = Range::new(0, 6, 2).iter();
/// assert_eq!(iter.next(), Some(0));
/// assert_eq!(iter.next_back(), Some(4));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<T>
where
    T: PrimInt + Signed,
{
    range: Range<T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for RangeIter<T>
where
    T: PrimInt + Signed,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.range.value_at(self.front);
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RangeIter<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.range.value_at(self.back))
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for RangeIter<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for RangeIter<T> where T: PrimInt + Signed {}

impl<T> IntoIterator for Range<T>
where
    T: PrimInt + Signed,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Range<T>
where
    T: PrimInt + Signed,
{
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

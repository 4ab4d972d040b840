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

//! # Array-Like Bulk Operations
//!
//! The higher-order helpers over [`Range`]: traversal (`for_each`, `map`,
//! `filter`, `flat_map`), quantifiers (`every`, `some`), searches (`find*`,
//! `includes`, `index_of`), reductions (`reduce`/`fold` and their right
//! variants), and the copying transforms (`join`, `to_sorted`, `to_spliced`).
//!
//! Every operation here is a thin loop over the O(1) index primitive and
//! behaves exactly like the same operation applied to the materialized list
//! of values. Callbacks receive `(value, index, &range)`; binding extra
//! context is ordinary closure capture. Membership searches exploit the
//! arithmetic structure instead of scanning: solving
//! `index = (target - start) / step` with an exact-division check answers
//! `includes`/`index_of`/`last_index_of` in O(1). Steps are nonzero, so
//! produced values are strictly monotonic and distinct, which makes the
//! inversion agree with a linear scan in both search directions.

use crate::error::EmptyReductionError;
use crate::range::{widen, Range, RangeIter};
use num_traits::{PrimInt, Signed};
use std::cmp::Ordering;
use std::fmt::Display;

impl<T> Range<T>
where
    T: PrimInt + Signed,
{
    /// Solves `start + step*index == value` for an in-bounds index.
    ///
    /// Values are strictly monotonic, so at most one index can match. The
    /// distance is taken as a `u128` magnitude after a direction check, so
    /// the inversion stays exact over the full `i128` domain.
    fn position_of(&self, value: T) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let step = self.step();
        if (step.is_positive() && value < self.start())
            || (step.is_negative() && value > self.start())
        {
            return None;
        }
        let distance = widen(value).abs_diff(widen(self.start()));
        let stride = widen(step).unsigned_abs();
        if distance % stride != 0 {
            return None;
        }
        let index = distance / stride;
        if index < self.len() as u128 {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Resolves a forward-search start position; `None` means no element
    /// can match (the position is at or past the end).
    fn forward_search_floor(&self, from: Option<isize>) -> Option<usize> {
        let len = self.len() as isize;
        let n = from.unwrap_or(0);
        if n >= len {
            return None;
        }
        Some(if n < 0 { (len + n).max(0) } else { n } as usize)
    }

    /// Invokes `action` on every value in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let mut seen = Vec::new();
    /// Range::new(5, 0, -1).for_each(|e, _, _| seen.push(e));
    /// assert_eq!(seen, vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(T, usize, &Self),
    {
        for i in 0..self.len() {
            action(self.value_at(i), i, self);
        }
    }

    /// Maps every value through `mapping` into a materialized vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let squares = Range::to(4).map(|e, _, _| e * e);
    /// assert_eq!(squares, vec![0, 1, 4, 9]);
    /// ```
    pub fn map<V, F>(&self, mut mapping: F) -> Vec<V>
    where
        F: FnMut(T, usize, &Self) -> V,
    {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            out.push(mapping(self.value_at(i), i, self));
        }
        out
    }

    /// Collects the values satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let even = Range::to(10).filter(|e, _, _| e % 2 == 0);
    /// assert_eq!(even, vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        let mut out = Vec::new();
        for i in 0..self.len() {
            let value = self.value_at(i);
            if predicate(value, i, self) {
                out.push(value);
            }
        }
        out
    }

    /// Maps every value to a sequence and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let pairs = Range::new(3, 0, -1).flat_map(|e, i, _| [i, e as usize]);
    /// assert_eq!(pairs, vec![0, 3, 1, 2, 2, 1]);
    /// ```
    pub fn flat_map<V, I, F>(&self, mut mapping: F) -> Vec<V>
    where
        I: IntoIterator<Item = V>,
        F: FnMut(T, usize, &Self) -> I,
    {
        let mut out = Vec::new();
        for i in 0..self.len() {
            out.extend(mapping(self.value_at(i), i, self));
        }
        out
    }

    /// Returns `true` if no value contradicts the predicate.
    ///
    /// Short-circuits on the first failure. Vacuously `true` for an empty
    /// range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert!(Range::new(1, 5, 2).every(|e, _, _| e > 0));
    /// assert!(!Range::new(1, 5, 2).every(|e, _, _| e > 1));
    /// ```
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        for i in 0..self.len() {
            if !predicate(self.value_at(i), i, self) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if any value satisfies the predicate.
    ///
    /// Short-circuits on the first match. `false` for an empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert!(Range::to(5).some(|e, _, _| e == 3));
    /// assert!(!Range::to(5).some(|e, _, _| e > 10));
    /// ```
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        for i in 0..self.len() {
            if predicate(self.value_at(i), i, self) {
                return true;
            }
        }
        false
    }

    /// Returns the first value satisfying the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::to(10).find(|e, _, _| e >= 5), Some(5));
    /// assert_eq!(Range::to(10).find(|e, _, _| e > 99), None);
    /// ```
    pub fn find<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        self.find_index(&mut predicate).map(|i| self.value_at(i))
    }

    /// Returns the last value satisfying the predicate.
    pub fn find_last<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        self.find_last_index(&mut predicate)
            .map(|i| self.value_at(i))
    }

    /// Returns the index of the first value satisfying the predicate.
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        (0..self.len()).find(|&i| predicate(self.value_at(i), i, self))
    }

    /// Returns the index of the last value satisfying the predicate.
    pub fn find_last_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(T, usize, &Self) -> bool,
    {
        (0..self.len())
            .rev()
            .find(|&i| predicate(self.value_at(i), i, self))
    }

    /// Left-reduces the range without a seed value.
    ///
    /// The first value becomes the initial accumulator; the reducer sees
    /// `(accumulator, value, index, &range)` for the remaining values.
    /// Fails with [`EmptyReductionError`] on an empty range; use
    /// [`fold`](Self::fold) to supply a seed instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let max = Range::to(11).reduce(|acc, e, _, _| acc.max(e));
    /// assert_eq!(max, Ok(10));
    /// ```
    pub fn reduce<F>(&self, mut reducer: F) -> Result<T, EmptyReductionError>
    where
        F: FnMut(T, T, usize, &Self) -> T,
    {
        if self.is_empty() {
            return Err(EmptyReductionError);
        }
        let mut acc = self.value_at(0);
        for i in 1..self.len() {
            acc = reducer(acc, self.value_at(i), i, self);
        }
        Ok(acc)
    }

    /// Left-folds the range from an explicit seed value.
    ///
    /// Never fails; the accumulator may be of a different type than the
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let digits = Range::to(5).fold(String::new(), |acc, e, _, _| format!("{acc}{e}"));
    /// assert_eq!(digits, "01234");
    /// ```
    pub fn fold<A, F>(&self, seed: A, mut reducer: F) -> A
    where
        F: FnMut(A, T, usize, &Self) -> A,
    {
        let mut acc = seed;
        for i in 0..self.len() {
            acc = reducer(acc, self.value_at(i), i, self);
        }
        acc
    }

    /// Right-reduces the range without a seed value.
    ///
    /// Like [`reduce`](Self::reduce) but walks indices from the end; the
    /// last value becomes the initial accumulator.
    pub fn reduce_right<F>(&self, mut reducer: F) -> Result<T, EmptyReductionError>
    where
        F: FnMut(T, T, usize, &Self) -> T,
    {
        if self.is_empty() {
            return Err(EmptyReductionError);
        }
        let mut acc = self.value_at(self.len() - 1);
        for i in (0..self.len() - 1).rev() {
            acc = reducer(acc, self.value_at(i), i, self);
        }
        Ok(acc)
    }

    /// Right-folds the range from an explicit seed value.
    pub fn fold_right<A, F>(&self, seed: A, mut reducer: F) -> A
    where
        F: FnMut(A, T, usize, &Self) -> A,
    {
        let mut acc = seed;
        for i in (0..self.len()).rev() {
            acc = reducer(acc, self.value_at(i), i, self);
        }
        acc
    }

    /// Returns `true` if the range produces `value` at or after the given
    /// position.
    ///
    /// `from` follows sequence-search conventions: negative positions count
    /// from the end and clamp to the start, positions past the end yield
    /// `false`. Answered in O(1) by arithmetic inversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(0, 10, 2);
    /// assert!(r.includes(4, None));
    /// assert!(!r.includes(5, None));
    /// assert!(r.includes(4, Some(2)));
    /// assert!(!r.includes(4, Some(3)));
    /// ```
    pub fn includes(&self, value: T, from: Option<isize>) -> bool {
        self.index_of(value, from).is_some()
    }

    /// Returns the index at which the range produces `value`, searching
    /// forward from `from`.
    ///
    /// Absence is `None`. Since values are distinct, this is also the only
    /// index at which `value` occurs. O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let r = Range::new(0, 10, 2);
    /// assert_eq!(r.index_of(4, None), Some(2));
    /// assert_eq!(r.index_of(5, None), None);
    /// assert_eq!(r.index_of(4, Some(3)), None);
    /// ```
    pub fn index_of(&self, value: T, from: Option<isize>) -> Option<usize> {
        let floor = self.forward_search_floor(from)?;
        self.position_of(value).filter(|&p| p >= floor)
    }

    /// Returns the index at which the range produces `value`, searching
    /// backward from `from` (default: the last index).
    ///
    /// A negative `from` counts from the end; positions past the end clamp
    /// to the last index. O(1).
    pub fn last_index_of(&self, value: T, from: Option<isize>) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let len = self.len() as isize;
        let n = from.unwrap_or(len - 1);
        let ceiling = if n < 0 { len + n } else { n.min(len - 1) };
        if ceiling < 0 {
            return None;
        }
        self.position_of(value).filter(|&p| p <= ceiling as usize)
    }

    /// Joins the values into a string with the given separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::new(5, 0, -1).join("-"), "5-4-3-2-1");
    /// assert_eq!(Range::to(0).join(","), "");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&value.to_string());
        }
        out
    }

    /// Materializes the values in ascending order.
    ///
    /// A range is already sorted one way or the other, so this is a plain
    /// collect, reversed when the step is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// assert_eq!(Range::new(5, 0, -2).to_sorted(), vec![1, 3, 5]);
    /// ```
    pub fn to_sorted(&self) -> Vec<T> {
        if self.step().is_negative() {
            self.iter().rev().collect()
        } else {
            self.iter().collect()
        }
    }

    /// Materializes the values sorted by the given comparator.
    ///
    /// Values are distinct, so sort stability cannot be observed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let descending = Range::to(4).to_sorted_by(|l, r| r.cmp(l));
    /// assert_eq!(descending, vec![3, 2, 1, 0]);
    /// ```
    pub fn to_sorted_by<F>(&self, comparator: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut out: Vec<T> = self.iter().collect();
        out.sort_unstable_by(comparator);
        out
    }

    /// Materializes the range with `delete_count` values removed at `start`
    /// and `items` inserted in their place.
    ///
    /// A negative `start` counts from the end; both `start` and
    /// `delete_count` clamp to the available length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let spliced = Range::to(5).to_spliced(1, 2, &[9, 9]);
    /// assert_eq!(spliced, vec![0, 9, 9, 3, 4]);
    /// ```
    pub fn to_spliced(&self, start: isize, delete_count: usize, items: &[T]) -> Vec<T> {
        let len = self.len() as isize;
        let cut = if start < 0 {
            (len + start).max(0)
        } else {
            start.min(len)
        } as usize;
        let removed = delete_count.min(self.len() - cut);
        let mut out = Vec::with_capacity(self.len() - removed + items.len());
        out.extend(self.iter().take(cut));
        out.extend_from_slice(items);
        out.extend((cut + removed..self.len()).map(|i| self.value_at(i)));
        out
    }

    /// Iterates over `(index, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use steprange::range::Range;
    /// let entries: Vec<_> = Range::new(5, 3, -1).entries().collect();
    /// assert_eq!(entries, vec![(0, 5), (1, 4)]);
    /// ```
    pub fn entries(&self) -> std::iter::Enumerate<RangeIter<T>> {
        self.iter().enumerate()
    }

    /// Iterates over the logical indices `0..len`.
    pub fn keys(&self) -> std::ops::Range<usize> {
        0..self.len()
    }

    /// Iterates over the produced values; identical to [`iter`](Self::iter).
    pub fn values(&self) -> RangeIter<T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materialize(r: &Range<i64>) -> Vec<i64> {
        r.iter().collect()
    }

    const STEPS: [i64; 6] = [-3, -2, -1, 1, 2, 3];

    fn for_each_small_range(mut check: impl FnMut(Range<i64>)) {
        for start in -5..=5 {
            for stop in -5..=5 {
                for step in STEPS {
                    check(Range::new(start, stop, step));
                }
            }
        }
    }

    #[test]
    fn test_for_each_visits_in_order() {
        for_each_small_range(|r| {
            let mut seen = Vec::new();
            let mut indices = Vec::new();
            r.for_each(|e, i, rng| {
                seen.push(e);
                indices.push(i);
                assert_eq!(*rng, r);
            });
            assert_eq!(seen, materialize(&r));
            assert_eq!(indices, (0..r.len()).collect::<Vec<_>>());
        });
    }

    #[test]
    fn test_map_matches_materialized_map() {
        for_each_small_range(|r| {
            let expected: Vec<i64> = materialize(&r).iter().map(|e| e * e).collect();
            assert_eq!(r.map(|e, _, _| e * e), expected, "{}", r);
        });
        // Callback sees value, index, and the range itself.
        let r = Range::new(2, 8, 2);
        let tagged = r.map(|e, i, rng| e + i as i64 + rng.start());
        assert_eq!(tagged, vec![4, 7, 10]);
    }

    #[test]
    fn test_filter_matches_materialized_filter() {
        for_each_small_range(|r| {
            let expected: Vec<i64> = materialize(&r)
                .into_iter()
                .filter(|e| e % 2 == 0)
                .collect();
            assert_eq!(r.filter(|e, _, _| e % 2 == 0), expected, "{}", r);
        });
    }

    #[test]
    fn test_flat_map() {
        let r = Range::new(3, 0, -1);
        assert_eq!(
            r.flat_map(|e, i, _| [i as i64, e]),
            vec![0, 3, 1, 2, 2, 1]
        );
        assert_eq!(
            Range::to(3).flat_map(|e, _, _| vec![e; e as usize]),
            vec![1, 2, 2]
        );
    }

    #[test]
    fn test_every_and_some() {
        for_each_small_range(|r| {
            let v = materialize(&r);
            assert_eq!(r.every(|e, _, _| e % 2 == 0), v.iter().all(|e| e % 2 == 0));
            assert_eq!(r.some(|e, _, _| e % 2 == 0), v.iter().any(|e| e % 2 == 0));
        });
        // Vacuous truth on empty ranges.
        let empty = Range::between(1, 1);
        assert!(empty.every(|_, _, _| false));
        assert!(!empty.some(|_, _, _| true));
    }

    #[test]
    fn test_every_short_circuits() {
        let mut calls = 0;
        Range::to(10).every(|e, _, _| {
            calls += 1;
            e < 2
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_find_family() {
        for_each_small_range(|r| {
            let v = materialize(&r);
            let middle = v.get(v.len() / 2).copied();
            let pred = |e: i64| Some(e) == middle;
            assert_eq!(r.find(|e, _, _| pred(e)), v.iter().copied().find(|&e| pred(e)));
            assert_eq!(
                r.find_last(|e, _, _| pred(e)),
                v.iter().copied().rev().find(|&e| pred(e))
            );
            assert_eq!(
                r.find_index(|e, _, _| pred(e)),
                v.iter().position(|&e| pred(e))
            );
            assert_eq!(
                r.find_last_index(|e, _, _| pred(e)),
                v.iter().rposition(|&e| pred(e))
            );
            assert_eq!(r.find(|_, _, _| false), None);
            assert_eq!(r.find_last_index(|_, _, _| false), None);
        });
    }

    #[test]
    fn test_reduce() {
        let get_max = |acc: i64, e: i64, _: usize, _: &Range<i64>| acc.max(e);
        assert_eq!(Range::between(1, 101).reduce(get_max), Ok(100));
        assert_eq!(Range::between(50, 51).reduce(get_max), Ok(50));
        assert_eq!(Range::to(11).reduce(get_max), Ok(10));
        assert_eq!(
            Range::between(50, 50).reduce(get_max),
            Err(EmptyReductionError)
        );
    }

    #[test]
    fn test_fold_orders_and_seeds() {
        let digits = Range::to(5).fold(String::new(), |acc, e, _, _| format!("{acc}{e}"));
        assert_eq!(digits, "01234");
        let digits = Range::to(5).fold_right(String::new(), |acc, e, _, _| format!("{acc}{e}"));
        assert_eq!(digits, "43210");
        assert_eq!(Range::between(50, 50).fold(1, |acc, _, _, _| acc), 1);
        assert_eq!(Range::between(50, 50).fold_right(1, |acc, _, _, _| acc), 1);
    }

    #[test]
    fn test_reduce_right() {
        let get_max = |acc: i64, e: i64, _: usize, _: &Range<i64>| acc.max(e);
        assert_eq!(Range::between(1, 101).reduce_right(get_max), Ok(100));
        assert_eq!(
            Range::between(50, 50).reduce_right(get_max),
            Err(EmptyReductionError)
        );
        // Indices descend from the second-to-last element.
        let mut seen = Vec::new();
        let _ = Range::to(4).reduce_right(|acc, _, i, _| {
            seen.push(i);
            acc
        });
        assert_eq!(seen, vec![2, 1, 0]);
    }

    /// Linear-scan oracles for the arithmetic membership searches.
    fn index_of_oracle(v: &[i64], value: i64, from: Option<isize>) -> Option<usize> {
        let len = v.len() as isize;
        let n = from.unwrap_or(0);
        if n >= len {
            return None;
        }
        let k = if n < 0 { (len + n).max(0) } else { n } as usize;
        (k..v.len()).find(|&i| v[i] == value)
    }

    fn last_index_of_oracle(v: &[i64], value: i64, from: Option<isize>) -> Option<usize> {
        let len = v.len() as isize;
        if len == 0 {
            return None;
        }
        let n = from.unwrap_or(len - 1);
        let k = if n < 0 { len + n } else { n.min(len - 1) };
        if k < 0 {
            return None;
        }
        (0..=k as usize).rev().find(|&i| v[i] == value)
    }

    #[test]
    fn test_searches_match_linear_scan() {
        for_each_small_range(|r| {
            let v = materialize(&r);
            let len = v.len() as isize;
            for value in -8..=8 {
                for from in (-len - 1)..=(len + 1) {
                    for from in [None, Some(from)] {
                        assert_eq!(
                            r.index_of(value, from),
                            index_of_oracle(&v, value, from),
                            "{} index_of({}, {:?})",
                            r,
                            value,
                            from
                        );
                        assert_eq!(
                            r.last_index_of(value, from),
                            last_index_of_oracle(&v, value, from),
                            "{} last_index_of({}, {:?})",
                            r,
                            value,
                            from
                        );
                        assert_eq!(
                            r.includes(value, from),
                            index_of_oracle(&v, value, from).is_some()
                        );
                    }
                }
            }
        });
    }

    #[test]
    fn test_search_spot_checks() {
        let r = Range::new(0, 10, 2); // 0, 2, 4, 6, 8
        assert!(r.includes(4, None));
        assert!(!r.includes(5, None));
        assert_eq!(r.index_of(4, None), Some(2));
        assert_eq!(r.index_of(4, Some(2)), Some(2));
        assert_eq!(r.index_of(4, Some(3)), None);
        assert_eq!(r.index_of(4, Some(-4)), Some(2));
        assert_eq!(r.last_index_of(4, None), Some(2));
        assert_eq!(r.last_index_of(4, Some(1)), None);
        // Off-grid and out-of-window values.
        assert_eq!(r.index_of(3, None), None);
        assert_eq!(r.index_of(10, None), None);
        assert_eq!(r.index_of(-2, None), None);
    }

    #[test]
    fn test_searches_at_extreme_bounds() {
        // Produces i128::MIN, -1, i128::MAX - 1; distances reach 2^128 - 2.
        let r = Range::new(i128::MIN, i128::MAX, i128::MAX);
        assert_eq!(r.index_of(i128::MIN, None), Some(0));
        assert_eq!(r.index_of(-1, None), Some(1));
        assert_eq!(r.last_index_of(i128::MAX - 1, None), Some(2));
        assert!(r.includes(-1, None));
        // Off-grid values whose distance is not a stride multiple.
        assert_eq!(r.index_of(0, None), None);
        assert_eq!(r.index_of(i128::MAX, None), None);
        // Wrong side of the start value.
        let descending = Range::new(0i128, i128::MIN, i128::MIN + 1);
        assert_eq!(descending.index_of(i128::MIN + 1, None), Some(1));
        assert_eq!(descending.index_of(1, None), None);
        assert_eq!(r.index_of(-1, Some(2)), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(Range::new(5, 0, -1).join("-"), "5-4-3-2-1");
        assert_eq!(Range::to(3).join(","), "0,1,2");
        assert_eq!(Range::to(3).join(""), "012");
        assert_eq!(Range::to(0).join(","), "");
        assert_eq!(Range::to(1).join("--"), "0");
    }

    #[test]
    fn test_to_sorted() {
        for_each_small_range(|r| {
            let mut expected = materialize(&r);
            expected.sort_unstable();
            assert_eq!(r.to_sorted(), expected, "{}", r);
            assert_eq!(r.to_sorted_by(|l, r| l.cmp(r)), expected);
            expected.reverse();
            assert_eq!(r.to_sorted_by(|l, r| r.cmp(l)), expected);
        });
    }

    #[test]
    fn test_to_spliced_matches_vec_splice() {
        for_each_small_range(|r| {
            let v = materialize(&r);
            let items = [100, 101, 102];
            for start in 0..=v.len() {
                for delete in 0..=v.len() + 1 {
                    let mut expected = v.clone();
                    let end = (start + delete).min(v.len());
                    expected.splice(start..end, items.iter().copied());
                    assert_eq!(
                        r.to_spliced(start as isize, delete, &items),
                        expected,
                        "{} to_spliced({}, {})",
                        r,
                        start,
                        delete
                    );
                }
            }
        });
    }

    #[test]
    fn test_to_spliced_negative_and_oversized_start() {
        let r = Range::to(5); // 0, 1, 2, 3, 4
        assert_eq!(r.to_spliced(-2, 1, &[9]), vec![0, 1, 2, 9, 4]);
        assert_eq!(r.to_spliced(-99, 2, &[]), vec![2, 3, 4]);
        assert_eq!(r.to_spliced(99, 2, &[7]), vec![0, 1, 2, 3, 4, 7]);
        assert_eq!(r.to_spliced(0, 99, &[]), Vec::<i64>::new());
    }

    #[test]
    fn test_entries_keys_values() {
        for_each_small_range(|r| {
            let v = materialize(&r);
            let expected: Vec<(usize, i64)> = v.iter().copied().enumerate().collect();
            assert_eq!(r.entries().collect::<Vec<_>>(), expected);
            assert_eq!(r.keys().collect::<Vec<_>>(), (0..v.len()).collect::<Vec<_>>());
            assert_eq!(r.values().collect::<Vec<_>>(), v);
        });
    }
}

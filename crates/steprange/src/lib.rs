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

//! # Steprange
//!
//! Immutable, lazily evaluated arithmetic-progression ranges with the full
//! protocol surface of an ordered sequence. A range is described entirely by
//! three integers `(start, stop, step)`; length, element lookup, slicing,
//! and reversal are O(1) arithmetic, and the values are only materialized by
//! operations whose results inherently require a concrete collection.
//!
//! ## Modules
//!
//! - `range`: The core `Range<T>` type over signed primitive integers:
//!   three construction shapes, negative-index access (`at`), O(1) `slice`
//!   and `to_reversed`, sequence-based equality and hashing, `Display`, and
//!   restartable iteration (`Iterator`, `DoubleEndedIterator`,
//!   `ExactSizeIterator`, `FusedIterator`).
//! - `ops`: Array-like bulk operations defined as thin loops over the core
//!   index primitive: `map`, `filter`, `flat_map`, `reduce`/`fold` (both
//!   directions), `every`/`some`, the `find*` family, O(1)
//!   `includes`/`index_of`/`last_index_of`, `join`, `to_sorted`,
//!   `to_spliced`, and `entries`/`keys`/`values`.
//! - `error`: The two failure modes — a zero step at construction and an
//!   unseeded reduction of an empty range. Everything else clamps or
//!   answers with `None`.
//!
//! ## Purpose
//!
//! Stepped integer sequences are cheap to describe and expensive to store.
//! This crate keeps them symbolic while still interoperating like a regular
//! ordered collection, so callers index, slice, compare, hash, and iterate
//! without ever allocating the underlying values.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod ops;
pub mod range;

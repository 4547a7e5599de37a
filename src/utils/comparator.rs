// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
Utilities to assist with comparing based on various characteristics. Useful for sorting by
properties different from the natural ordering provided by ordering traits e.g. [`PartialOrd`].
*/

use std::cmp::Ordering;
use std::sync::Arc;

/**
A shared, thread-safe comparison function.

`'a` bounds whatever the function borrows, which includes the elements themselves when `T` is a
reference type.
*/
pub type CompareFn<'a, T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a>;

/// An interface for structs intended to be used as a comparator.
pub trait Comparator<T> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Greater`] if `a` sorts after `b`
    1. Returns [`Ordering::Equal`] if `a` and `b` are equivalent
    1. Returns [`Ordering::Less`] if `a` sorts before `b`
    */
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/**
Wrap a [`Comparator`] into a [`CompareFn`] handle.

The handle owns the comparator so it can be shared freely between comparator pairs and threads.
*/
pub(crate) fn into_compare_fn<'a, T, C>(comparator: C) -> CompareFn<'a, T>
where
    T: 'a,
    C: Comparator<T> + Send + Sync + 'a,
{
    Arc::new(move |a: &T, b: &T| comparator.compare(a, b))
}

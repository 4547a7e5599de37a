/*!
The ascending and descending comparator pair returned by the constructors in this crate.
*/

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::direction::Direction;
use crate::utils::comparator::CompareFn;

/**
A pair of comparison functions ordering elements of type `T` in ascending and descending order.

Both sides are plain comparison functions and can be handed to [`slice::sort_by`] or to any other
sort routine that accepts a comparison function. The pair is immutable and cloning it only clones
the shared handles.

`'a` bounds whatever the comparison functions borrow. When `T` is itself a reference, e.g. `&str`
slices of a local `String`, the pair lives no longer than the borrowed data.

# Invariants

For any `a` and `b`, the descending side returns the reverse of the ascending side. In particular,
elements that are equivalent compare as [`Ordering::Equal`] in both directions.
*/
pub struct Comparators<'a, T> {
    /// The comparison function ordering elements from smallest to largest.
    asc: CompareFn<'a, T>,

    /// The comparison function ordering elements from largest to smallest.
    desc: CompareFn<'a, T>,
}

/// Crate-only methods
impl<'a, T> Comparators<'a, T> {
    /// Construct a new [`Comparators`] pair from its two sides.
    pub(crate) fn new(asc: CompareFn<'a, T>, desc: CompareFn<'a, T>) -> Self {
        Self { asc, desc }
    }
}

/// Public methods
impl<'a, T> Comparators<'a, T> {
    /**
    Get the ascending comparison function.

    The returned reference borrows the pair and can be passed directly to [`slice::sort_by`].
    */
    pub fn asc(&self) -> &(dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a) {
        &*self.asc
    }

    /**
    Get the descending comparison function.

    The returned reference borrows the pair and can be passed directly to [`slice::sort_by`].
    */
    pub fn desc(&self) -> &(dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a) {
        &*self.desc
    }

    /// Get an owned handle to the ascending comparison function.
    pub fn asc_fn(&self) -> CompareFn<'a, T> {
        Arc::clone(&self.asc)
    }

    /// Get an owned handle to the descending comparison function.
    pub fn desc_fn(&self) -> CompareFn<'a, T> {
        Arc::clone(&self.desc)
    }

    /// Get an owned handle to the comparison function for the specified `direction`.
    pub fn by(&self, direction: Direction) -> CompareFn<'a, T> {
        match direction {
            Direction::Ascending => self.asc_fn(),
            Direction::Descending => self.desc_fn(),
        }
    }

    /// Compare `a` and `b` in the specified `direction`.
    pub fn compare(&self, direction: Direction, a: &T, b: &T) -> Ordering {
        match direction {
            Direction::Ascending => (self.asc)(a, b),
            Direction::Descending => (self.desc)(a, b),
        }
    }
}

impl<'a, T> Clone for Comparators<'a, T> {
    fn clone(&self) -> Self {
        Self {
            asc: Arc::clone(&self.asc),
            desc: Arc::clone(&self.desc),
        }
    }
}

impl<'a, T> fmt::Debug for Comparators<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparators")
            .field("asc", &"Fn(&T, &T) -> Ordering")
            .field("desc", &"Fn(&T, &T) -> Ordering")
            .finish()
    }
}

/*!
The comparator factory builds an ascending and descending comparator pair from a key extraction
function.

The key extraction function maps an element to the value that is actually compared, e.g. a field of
a struct. The extracted keys only need to implement [`PartialOrd`]. The comparators only ever ask
whether two keys are equal and whether one key is greater than the other, so keys that are not
totally ordered (e.g. floating point `NaN`) get whatever answer those two operators give.
*/

use std::cmp::Ordering;
use std::sync::Arc;

use crate::argument::{Argument, SharedKeyFn};
use crate::config::{DIRECTIONS, KEY_ARGUMENT_NAME};
use crate::direction::Direction;
use crate::errors::ComparatorResult;
use crate::pair::Comparators;
use crate::utils::comparator::{into_compare_fn, Comparator};

/**
A comparator that orders elements by a key extracted from each element.

Both directions call the key extractor on `a` and then on `b`. The descending variant reverses the
result instead of swapping its arguments, so an impure key extractor sees the same call sequence in
either direction.
*/
pub(crate) struct KeyComparator<'a, T, K> {
    /// Maps an element to the value that is compared.
    to_comparable: SharedKeyFn<'a, T, K>,

    /// The direction that this comparator orders elements in.
    direction: Direction,
}

/// Crate-only methods
impl<'a, T, K> KeyComparator<'a, T, K> {
    /// Construct a new [`KeyComparator`].
    pub(crate) fn new(to_comparable: SharedKeyFn<'a, T, K>, direction: Direction) -> Self {
        Self {
            to_comparable,
            direction,
        }
    }
}

impl<'a, T, K> Comparator<T> for KeyComparator<'a, T, K>
where
    K: PartialOrd,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let a_comparable = (self.to_comparable)(a);
        let b_comparable = (self.to_comparable)(b);
        if a_comparable == b_comparable {
            return Ordering::Equal;
        }

        let comparison = if a_comparable > b_comparable {
            Ordering::Greater
        } else {
            Ordering::Less
        };

        self.direction.apply(comparison)
    }
}

/**
Generate ascending and descending comparators that order elements by the key returned from
`to_comparable`.

The key extractor is invoked freshly for both arguments on every comparison. Keys are never cached.
The elements, keys and key extractor may all borrow data, in which case the returned pair is bound
to the shortest of those borrows.

# Example

```
use sortkit::comparators;

let by_length = comparators(|word: &&str| word.len());
let mut words = vec!["various", "of", "words"];

words.sort_by(by_length.asc());
assert_eq!(words, vec!["of", "words", "various"]);

words.sort_by(by_length.desc());
assert_eq!(words, vec!["various", "words", "of"]);
```

Sorting slices of a string that only lives on the stack works the same way:

```
use sortkit::comparators;

let text = String::from("This is an array of words");
let mut words: Vec<&str> = text.split(' ').collect();

words.sort_by(comparators(|word: &&str| word.to_lowercase()).asc());
assert_eq!(words, vec!["an", "array", "is", "of", "This", "words"]);
```
*/
pub fn comparators<'a, T, K, F>(to_comparable: F) -> Comparators<'a, T>
where
    T: 'a,
    K: PartialOrd + 'a,
    F: Fn(&T) -> K + Send + Sync + 'a,
{
    let to_comparable: SharedKeyFn<'a, T, K> = Arc::new(to_comparable);
    build_comparators(to_comparable)
}

/**
Generate ascending and descending comparators from a loosely typed key extractor argument.

This is the checked counterpart of [`comparators`] for call sites that cannot guarantee a key
extractor was supplied.

# Errors

- [`ComparatorError::MissingArgument`](crate::ComparatorError::MissingArgument) if the argument is
  [`Argument::Missing`].
- [`ComparatorError::InvalidArgumentType`](crate::ComparatorError::InvalidArgumentType) if the
  argument is a non-callable [`Argument::Value`].
*/
pub fn try_comparators<'a, T, K>(
    to_comparable: Argument<SharedKeyFn<'a, T, K>>,
) -> ComparatorResult<Comparators<'a, T>>
where
    T: 'a,
    K: PartialOrd + 'a,
{
    let to_comparable = to_comparable.into_required(KEY_ARGUMENT_NAME).map_err(|error| {
        log::warn!("Rejected the key extractor for a comparator pair. Error: {}", error);
        error
    })?;

    Ok(build_comparators(to_comparable))
}

/// Build the comparator pair for an already validated key extractor.
fn build_comparators<'a, T, K>(to_comparable: SharedKeyFn<'a, T, K>) -> Comparators<'a, T>
where
    T: 'a,
    K: PartialOrd + 'a,
{
    log::debug!(
        "Building key comparators for elements of type {}",
        std::any::type_name::<T>()
    );

    let [asc, desc] = DIRECTIONS.map(|direction| {
        into_compare_fn(KeyComparator::new(Arc::clone(&to_comparable), direction))
    });

    Comparators::new(asc, desc)
}

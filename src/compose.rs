/*!
The comparator composer combines several comparison functions into a single ascending and
descending comparator pair.

The comparison functions are given in order of precedence. The first one decides the ordering and
every following one is only consulted to break ties left by the ones before it. Because the inputs
are already directional, a caller can mix directions per level, e.g. order by age descending, then
by last name ascending, then by first name descending.
*/

use std::cmp::Ordering;
use std::sync::Arc;

use crate::argument::Argument;
use crate::config::{COMPARATORS_ARGUMENT_NAME, DIRECTIONS};
use crate::direction::Direction;
use crate::errors::{ComparatorError, ComparatorResult};
use crate::pair::Comparators;
use crate::utils::comparator::{into_compare_fn, CompareFn, Comparator};

/// A comparator that consults a list of comparison functions in order of precedence.
pub(crate) struct ComposedComparator<'a, T> {
    /**
    The comparison functions to consult, highest precedence first.

    This is shared between the ascending and descending comparators of a pair.
    */
    comparators: Arc<[CompareFn<'a, T>]>,

    /// The direction that the combined result is reported in.
    direction: Direction,
}

/// Crate-only methods
impl<'a, T> ComposedComparator<'a, T> {
    /// Construct a new [`ComposedComparator`].
    pub(crate) fn new(comparators: Arc<[CompareFn<'a, T>]>, direction: Direction) -> Self {
        Self {
            comparators,
            direction,
        }
    }
}

impl<'a, T> Comparator<T> for ComposedComparator<'a, T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let decided = self
            .comparators
            .iter()
            .map(|comparator| comparator(a, b))
            .find(|comparison| comparison.is_ne());

        match decided {
            Some(comparison) => self.direction.apply(comparison),
            // Every comparator reported a tie
            None => Ordering::Equal,
        }
    }
}

/**
Combine multiple comparison functions into new ascending and descending comparators.

`comparators` must be given in order of precedence. The ascending side returns the first result
that is not [`Ordering::Equal`] as is. The descending side reverses that result. Both sides return
[`Ordering::Equal`] if every comparator reports a tie.

# Errors

Returns [`ComparatorError::EmptyArgumentList`] if `comparators` is empty.

# Example

```
use sortkit::{comparators, compose_comparators};

let by_length = comparators(|word: &&str| word.len());
let by_word = comparators(|word: &&str| *word);
let composed = compose_comparators(vec![by_length.desc_fn(), by_word.asc_fn()]).unwrap();

let mut words = vec!["an", "of", "array", "is", "words"];
words.sort_by(composed.asc());
assert_eq!(words, vec!["array", "words", "an", "is", "of"]);
```
*/
pub fn compose_comparators<'a, T, I>(comparators: I) -> ComparatorResult<Comparators<'a, T>>
where
    T: 'a,
    I: IntoIterator<Item = CompareFn<'a, T>>,
{
    let comparators: Vec<CompareFn<'a, T>> = comparators.into_iter().collect();
    if comparators.is_empty() {
        log::warn!("Rejected a request to compose an empty list of comparators.");
        return Err(ComparatorError::EmptyArgumentList);
    }

    Ok(build_composed(comparators))
}

/**
Combine multiple loosely typed comparison function arguments into new ascending and descending
comparators.

This is the checked counterpart of [`compose_comparators`]. Every argument is validated before any
comparator is built.

# Errors

- [`ComparatorError::EmptyArgumentList`] if `arguments` is empty.
- [`ComparatorError::InvalidArgumentType`] if any argument is not callable. The error names the
  position of the first offending argument.
*/
pub fn try_compose_comparators<'a, T, I>(arguments: I) -> ComparatorResult<Comparators<'a, T>>
where
    T: 'a,
    I: IntoIterator<Item = Argument<CompareFn<'a, T>>>,
{
    let arguments: Vec<Argument<CompareFn<'a, T>>> = arguments.into_iter().collect();
    if arguments.is_empty() {
        log::warn!("Rejected a request to compose an empty list of comparators.");
        return Err(ComparatorError::EmptyArgumentList);
    }

    let comparators = arguments
        .into_iter()
        .enumerate()
        .map(|(position, argument)| {
            argument.into_callable(format!("{}[{}]", COMPARATORS_ARGUMENT_NAME, position))
        })
        .collect::<ComparatorResult<Vec<CompareFn<'a, T>>>>()
        .map_err(|error| {
            log::warn!("Rejected a comparator for composition. Error: {}", error);
            error
        })?;

    Ok(build_composed(comparators))
}

/// Build the comparator pair for an already validated, non-empty list of comparators.
fn build_composed<'a, T: 'a>(comparators: Vec<CompareFn<'a, T>>) -> Comparators<'a, T> {
    log::debug!(
        "Composing {} comparators for elements of type {}",
        comparators.len(),
        std::any::type_name::<T>()
    );

    let comparators: Arc<[CompareFn<'a, T>]> = comparators.into();
    let [asc, desc] = DIRECTIONS.map(|direction| {
        into_compare_fn(ComposedComparator::new(Arc::clone(&comparators), direction))
    });

    Comparators::new(asc, desc)
}

/*!
Sortkit builds comparison functions for ordering sequences. It does not sort anything itself. The
comparators it produces are meant to be handed to [`slice::sort_by`] or any other sort routine that
accepts a comparison function.

There are two building blocks:

1. [`comparators`] derives an ascending and descending comparator pair from a key extraction
   function.
1. [`compose_comparators`] combines several comparison functions into a single pair that consults
   them in order of precedence, falling through to the next comparison function on ties.

Both return a [`Comparators`] pair. Its sides can be borrowed for a single sort with
[`Comparators::asc`] and [`Comparators::desc`], or taken as owned [`CompareFn`] handles with
[`Comparators::asc_fn`] and [`Comparators::desc_fn`] to be composed further.

```
use sortkit::{comparators, compose_comparators};

#[derive(Debug, PartialEq)]
struct Person {
    last_name: &'static str,
    age: u32,
}

let by_age = comparators(|person: &Person| person.age);
let by_last_name = comparators(|person: &Person| person.last_name);
let oldest_first = compose_comparators(vec![by_age.desc_fn(), by_last_name.asc_fn()]).unwrap();

let mut people = vec![
    Person { last_name: "Lovelace", age: 2 },
    Person { last_name: "Doe", age: 42 },
    Person { last_name: "Boole", age: 42 },
];
people.sort_by(oldest_first.asc());

assert_eq!(people[0].last_name, "Boole");
assert_eq!(people[2].last_name, "Lovelace");
```

Call sites that assemble their arguments at runtime can use the checked constructors
[`try_comparators`] and [`try_compose_comparators`], which take [`Argument`] values and report bad
input as a [`ComparatorError`] instead of relying on the type system.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod config;
mod utils;

pub mod argument;
pub use argument::{Argument, SharedKeyFn};

pub mod compose;
pub use compose::{compose_comparators, try_compose_comparators};

pub mod direction;
pub use direction::Direction;

mod errors;
pub use errors::{ComparatorError, ComparatorResult};

pub mod factory;
pub use factory::{comparators, try_comparators};

mod pair;
pub use pair::Comparators;

pub use utils::comparator::{CompareFn, Comparator};

/*!
This module contains global configuration constants for the crate.

Comparator construction has no runtime options. The values here are fixed knobs shared by the
factory and the composer.
*/

use crate::direction::Direction;

/**
The directions that every comparator pair is built for, in the order they are returned.

Both constructors map over this list to build the `asc` and `desc` sides from the same code.
*/
pub(crate) const DIRECTIONS: [Direction; 2] = [Direction::Ascending, Direction::Descending];

/// The name of the key extractor argument as it appears in error messages.
pub(crate) const KEY_ARGUMENT_NAME: &str = "to_comparable";

/// The name of the comparator list argument as it appears in error messages.
pub(crate) const COMPARATORS_ARGUMENT_NAME: &str = "comparators";

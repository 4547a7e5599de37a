/*!
The direction that a comparator orders elements in.
*/

use std::cmp::Ordering;

/// The direction that a comparator orders elements in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Smaller keys sort first.
    Ascending,
    /// Larger keys sort first.
    Descending,
}

impl Direction {
    /**
    The numeric coefficient that a raw comparison result is scaled by for this direction.

    This is `1` for [`Direction::Ascending`] and `-1` for [`Direction::Descending`]. Multiplying an
    [`Ordering`] cast to an integer by the coefficient gives the signed comparison result that sort
    routines working with integers expect.

    ```
    use std::cmp::Ordering;

    use sortkit::{comparators, Direction};

    let by_identity = comparators(|value: &i32| *value);
    let signed = by_identity.compare(Direction::Ascending, &12, &7) as i8;

    assert_eq!(signed, 1);
    assert_eq!(Direction::Descending.coefficient() * signed, -1);
    assert_eq!(Direction::Descending.coefficient() * Ordering::Equal as i8, 0);
    ```
    */
    pub fn coefficient(&self) -> i8 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }

    /**
    Apply this direction to an ordering computed in ascending terms.

    The ordering is scaled by [`Direction::coefficient`]. [`Ordering::Equal`] scales to zero and is
    returned unchanged for both directions.
    */
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        (self.coefficient() * ordering as i8).cmp(&0)
    }
}

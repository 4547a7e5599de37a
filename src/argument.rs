/*!
Loosely typed arguments for the comparator constructors.

The strongly typed constructors ([`crate::comparators`] and [`crate::compose_comparators`]) make it
impossible to omit a function or to pass something that cannot be called. Call sites that assemble
their arguments at runtime, e.g. a sort definition read from user input or a foreign function
boundary, cannot make that guarantee. [`Argument`] models what such a call site may hand over so
that the `try_*` constructors can reject bad input with a descriptive error.
*/

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::errors::{ComparatorError, ComparatorResult};
use crate::utils::comparator::CompareFn;

/// A shared, thread-safe key extraction function that may borrow for `'a`.
pub type SharedKeyFn<'a, T, K> = Arc<dyn Fn(&T) -> K + Send + Sync + 'a>;

/// A value supplied in place of a function argument.
pub enum Argument<C> {
    /// Nothing was supplied.
    Missing,

    /// A callable was supplied.
    Callable(C),

    /**
    Something other than a callable was supplied.

    The value is a rendering of what was supplied and is only used for error messages.
    */
    Value(String),
}

impl<C> Argument<C> {
    /// Create an argument standing in for a non-callable value.
    pub fn value<V: fmt::Debug>(value: V) -> Self {
        Argument::Value(format!("{:?}", value))
    }

    /**
    Unwrap the callable held by this argument.

    `name` describes the argument in error messages. A missing argument is reported as
    [`ComparatorError::MissingArgument`] and anything else that is not callable is reported as
    [`ComparatorError::InvalidArgumentType`].
    */
    pub(crate) fn into_required(self, name: &'static str) -> ComparatorResult<C> {
        match self {
            Argument::Callable(callable) => Ok(callable),
            Argument::Missing => Err(ComparatorError::MissingArgument(name)),
            Argument::Value(found) => Err(ComparatorError::InvalidArgumentType {
                argument: name.to_string(),
                found,
            }),
        }
    }

    /**
    Unwrap the callable held by this argument, treating an absent value the same as any other
    non-callable.

    This is used for list elements where an empty slot is a type error rather than a missing
    argument.
    */
    pub(crate) fn into_callable(self, argument: String) -> ComparatorResult<C> {
        match self {
            Argument::Callable(callable) => Ok(callable),
            Argument::Missing => Err(ComparatorError::InvalidArgumentType {
                argument,
                found: "nothing".to_string(),
            }),
            Argument::Value(found) => Err(ComparatorError::InvalidArgumentType { argument, found }),
        }
    }
}

impl<'a, T, K> Argument<SharedKeyFn<'a, T, K>> {
    /// Create an argument holding a key extraction function.
    pub fn key<F>(to_comparable: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        Argument::Callable(Arc::new(to_comparable))
    }
}

impl<'a, T> Argument<CompareFn<'a, T>> {
    /// Create an argument holding a comparison function.
    pub fn comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'a,
    {
        Argument::Callable(Arc::new(compare))
    }
}

impl<C> From<Option<C>> for Argument<C> {
    fn from(maybe_callable: Option<C>) -> Self {
        match maybe_callable {
            Some(callable) => Argument::Callable(callable),
            None => Argument::Missing,
        }
    }
}

impl<C> fmt::Debug for Argument<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Missing => write!(f, "Missing"),
            Argument::Callable(_) => write!(f, "Callable(..)"),
            Argument::Value(found) => f.debug_tuple("Value").field(found).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_required_arguments_are_reported_by_name() {
        let argument: Argument<SharedKeyFn<'_, u32, u32>> = Argument::Missing;

        assert_eq!(
            argument.into_required("to_comparable").err(),
            Some(ComparatorError::MissingArgument("to_comparable"))
        );
    }

    #[test]
    fn values_are_rendered_with_their_debug_representation() {
        let argument: Argument<SharedKeyFn<'_, u32, u32>> = Argument::value("forty-two");

        assert_eq!(
            argument.into_required("to_comparable").err(),
            Some(ComparatorError::InvalidArgumentType {
                argument: "to_comparable".to_string(),
                found: "\"forty-two\"".to_string(),
            })
        );
    }

    #[test]
    fn missing_list_elements_are_type_errors() {
        let argument: Argument<CompareFn<'_, u32>> = None.into();

        assert_eq!(
            argument.into_callable("comparators[0]".to_string()).err(),
            Some(ComparatorError::InvalidArgumentType {
                argument: "comparators[0]".to_string(),
                found: "nothing".to_string(),
            })
        );
    }

    #[test]
    fn callables_are_unwrapped() {
        let argument = Argument::comparator(|a: &u32, b: &u32| a.cmp(b));
        let compare = argument.into_callable("comparators[0]".to_string()).unwrap();
        assert_eq!(compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn debug_output_does_not_expose_callables() {
        let argument = Argument::key(|value: &u32| *value);
        assert_eq!(format!("{:?}", argument), "Callable(..)");
        assert_eq!(
            format!("{:?}", Argument::<SharedKeyFn<'_, u32, u32>>::value(42)),
            "Value(\"42\")"
        );
    }
}

//! Point-free method lifting.
//!
//! [`pf`] turns "call a method on a receiver" into a curried function whose
//! last argument is the receiver:
//!
//! ```text
//! pf(n, method)(a_1, ..., a_n, target) = target.method(a_1, ..., a_n)
//! ```
//!
//! The wrapper accumulates arguments exactly like [`curry`](crate::curry):
//! it saturates once `n + 1` arguments have arrived, in any grouping. The
//! receiver is always the argument at index `n`; any further arguments are
//! ignored.
//!
//! # Provided Wrappers
//!
//! | wrapper      | built as                     |
//! |--------------|------------------------------|
//! | [`map`]      | `pf(1, Method::Map)`         |
//! | [`for_each`] | `pf(1, Method::ForEach)`     |
//! | [`reduce`]   | `pf(2, Method::Reduce)`      |
//! | [`filter`]   | `pf(1, Method::Filter)`      |
//! | [`find`]     | `pf(1, Method::Find)`        |
//! | [`some`]     | `pf(1, Method::Some)`        |
//! | [`every`]    | `pf(1, Method::Every)`       |
//!
//! # Examples
//!
//! ```rust
//! use fph::pointfree::{Method, map, pf};
//! use fph::{Value, args, array, func};
//!
//! let increment = func!(|value| Ok(Value::from(value.as_number()? + 1.0)));
//!
//! assert_eq!(map().call(&args![increment.clone(), array![1, 2, 3]])?, array![2, 3, 4]);
//!
//! // Arguments may arrive one call at a time.
//! let increment_all = map().call(&args![increment])?;
//! assert_eq!(increment_all.call(&args![array![9]])?, array![10]);
//!
//! // A zero-arity method still waits for its receiver.
//! let shout = pf(0, Method::ToUpperCase);
//! assert_eq!(shout.call(&args!["hello"])?, Value::from("HELLO"));
//! # Ok::<(), fph::Error>(())
//! ```

mod capability;
mod method;

pub use capability::{Filterable, Iterable, Mappable, Reducible, Searchable, TextCase};
pub use method::Method;

use crate::value::{Function, Value};

/// Builds a curried wrapper invoking `method` on the `(arity + 1)`-th argument
/// with the first `arity` arguments.
///
/// Dispatch happens only at saturation; a receiver lacking the capability
/// fails there with [`Error::MethodNotFound`](crate::Error::MethodNotFound).
/// The wrapper's arity saturates at `usize::MAX`.
pub fn pf(arity: usize, method: impl Into<Method>) -> Function {
    let method = method.into();
    let name = method.name().to_string();
    Function::named(name, arity.saturating_add(1), move |arguments| {
        let receiver = Function::argument(arguments, arity);
        let positional = arguments.get(..arity).unwrap_or(arguments);
        tracing::trace!(
            method = %method,
            receiver = receiver.type_name(),
            "point-free dispatch"
        );
        method.invoke(&receiver, positional)
    })
    .curried()
}

/// `map(callback, receiver)`: point-free [`Mappable::map_with`].
pub fn map() -> Function {
    pf(1, Method::Map)
}

/// `for_each(callback, receiver)`: point-free [`Iterable::for_each_with`].
pub fn for_each() -> Function {
    pf(1, Method::ForEach)
}

/// `reduce(reducer, initial, receiver)`: point-free [`Reducible::reduce_with`].
pub fn reduce() -> Function {
    pf(2, Method::Reduce)
}

/// `filter(predicate, receiver)`: point-free [`Filterable::filter_with`].
pub fn filter() -> Function {
    pf(1, Method::Filter)
}

/// `find(predicate, receiver)`: point-free [`Filterable::find_with`].
pub fn find() -> Function {
    pf(1, Method::Find)
}

/// `some(predicate, receiver)`: point-free [`Searchable::some_with`].
pub fn some() -> Function {
    pf(1, Method::Some)
}

/// `every(predicate, receiver)`: point-free [`Searchable::every_with`].
pub fn every() -> Function {
    pf(1, Method::Every)
}

/// Wraps `value` as the receiver-last argument list `[arguments.., value]`.
///
/// Handy when calling a point-free wrapper from Rust with a receiver that is
/// already at hand.
pub fn with_receiver<I>(arguments: I, receiver: impl Into<Value>) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    arguments
        .into_iter()
        .map(Into::into)
        .chain(std::iter::once(receiver.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    fn increment() -> Function {
        Function::new(1, |arguments| {
            Ok(Value::from(Function::argument(arguments, 0).as_number()? + 1.0))
        })
    }

    #[rstest]
    fn test_largest_arity_saturates_instead_of_overflowing() {
        let lifted = pf(usize::MAX, Method::Map);
        assert!(matches!(
            lifted.call(&[Value::from(increment())]).unwrap(),
            Value::Function(_)
        ));
    }

    #[rstest]
    fn test_wrapper_waits_for_receiver() {
        let partial = map().call(&[Value::from(increment())]).unwrap();
        assert!(matches!(partial, Value::Function(_)));
    }

    #[rstest]
    fn test_receiver_position_follows_arity() {
        let add = Function::new(2, |arguments| {
            Ok(Value::from(
                Function::argument(arguments, 0).as_number()?
                    + Function::argument(arguments, 1).as_number()?,
            ))
        });
        let sum = reduce()
            .call(&with_receiver([Value::from(add), Value::from(10)], Value::array([1, 2, 3])))
            .unwrap();
        assert_eq!(sum, Value::from(16));
    }

    #[rstest]
    fn test_extra_arguments_are_ignored() {
        let result = pf(0, Method::ToUpperCase)
            .call(&[Value::from("a"), Value::from("ignored")])
            .unwrap();
        assert_eq!(result, Value::from("A"));
    }

    #[rstest]
    fn test_method_not_found_only_at_saturation() {
        let partial = map().call(&[Value::from(increment())]).unwrap();
        let error = partial.call(&[Value::from(5)]).unwrap_err();
        assert_eq!(
            error,
            Error::MethodNotFound {
                method: "map".to_string(),
                receiver: "number",
            }
        );
    }

    #[rstest]
    fn test_wrapper_name_is_method_name() {
        assert_eq!(filter().name(), "filter");
    }
}

//! Function sequencing and conditional application.
//!
//! # Overview
//!
//! - [`pipe`]: Compose functions left-to-right (data flow style)
//! - [`compose`]: Compose functions right-to-left (mathematical composition)
//! - [`doif`]: Apply a function only when a predicate holds
//! - [`tap`]: Run a side effect and pass the argument through
//! - [`not`]: Negate truthiness
//!
//! # Pipeline and Composition
//!
//! ```text
//! pipe(f, g, h)(xs)    = h(g(f(xs)))
//! compose(h, g, f)(xs) = h(g(f(xs)))
//! ```
//!
//! Only the first function applied (leftmost for `pipe`, rightmost for
//! `compose`) receives the original arguments, so only it may take several.
//! Every later function receives exactly one value: the previous result.
//!
//! # Examples
//!
//! ```rust
//! use fph::compose::{compose, pipe};
//! use fph::pointfree::{Method, pf};
//! use fph::{Value, args, func};
//!
//! let add = func!(|first, second| Ok(Value::from(first.as_number()? + second.as_number()?)));
//! let to_string = pf(0, Method::ToString);
//!
//! let piped = pipe([add.clone(), to_string.clone()])?;
//! let composed = compose([to_string, add])?;
//!
//! assert_eq!(piped.call(&args![1, 2])?, Value::from("3"));
//! assert_eq!(composed.call(&args![1, 2])?, Value::from("3"));
//! # Ok::<(), fph::Error>(())
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Consistency**: `pipe(f, g) == compose(g, f)`

mod conditional;

pub use conditional::{doif, not, tap};

use crate::error::{Error, Result};
use crate::value::Function;

/// Chains `functions` left to right.
///
/// A single function is returned unchanged. The chained function has arity 0
/// and forwards every argument to the first function.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `functions` is empty.
pub fn pipe<I>(functions: I) -> Result<Function>
where
    I: IntoIterator<Item = Function>,
{
    chain("pipe", functions.into_iter().collect())
}

/// Chains `functions` right to left.
///
/// A single function is returned unchanged. The chained function has arity 0
/// and forwards every argument to the last function.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `functions` is empty.
pub fn compose<I>(functions: I) -> Result<Function>
where
    I: IntoIterator<Item = Function>,
{
    let mut functions: Vec<_> = functions.into_iter().collect();
    functions.reverse();
    chain("compose", functions)
}

fn chain(operation: &'static str, functions: Vec<Function>) -> Result<Function> {
    let mut remaining = functions.into_iter();
    let first = remaining
        .next()
        .ok_or_else(|| Error::invalid_argument(operation, "at least one function is required"))?;
    let rest: Vec<_> = remaining.collect();

    if rest.is_empty() {
        return Ok(first);
    }

    Ok(Function::named(operation, 0, move |arguments| {
        rest.iter()
            .try_fold(first.call(arguments)?, |value, next| next.call(&[value]))
    }))
}

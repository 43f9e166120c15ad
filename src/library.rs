//! The aggregate export: every combinator as a dynamic function value.
//!
//! [`library`] collects every export into one [`Mapping`], keyed by name, so
//! callers can look combinators up at runtime or pass the whole set around as
//! a value. Entries behave exactly like the functions returned by each
//! module. `curry`, `pf`, `pipe` and `compose` take their inputs as values
//! here, so they can themselves be curried and composed.
//!
//! # Examples
//!
//! ```rust
//! use fph::{Value, args, array, library};
//!
//! let exports = library();
//! let reverse = exports.get("reverse").cloned().unwrap_or_default();
//! assert_eq!(reverse.call(&args![array![1, 2]])?, array![2, 1]);
//!
//! let pf = exports.get("pf").cloned().unwrap_or_default();
//! let shout = pf.call(&args![0, "toUpperCase"])?;
//! assert_eq!(shout.call(&args!["hi"])?, Value::from("HI"));
//! # Ok::<(), fph::Error>(())
//! ```

use crate::compose::{compose, doif, not, pipe, tap};
use crate::curry::curry;
use crate::equality::{equals, prop, prop_eq};
use crate::error::{Error, Result};
use crate::list::{flatten, is_empty, reverse};
use crate::object::{for_in, map_in, omit, pick, props};
use crate::pointfree::{every, filter, find, for_each, map, pf, reduce, some};
use crate::value::{Function, Mapping, Value};

/// Returns every export keyed by its name.
pub fn library() -> Mapping {
    #[cfg_attr(not(feature = "async"), allow(unused_mut))]
    let mut exports: Mapping = [
        ("curry", dynamic_curry()),
        ("tap", tap()),
        ("pf", dynamic_pf()),
        ("pipe", dynamic_pipe()),
        ("compose", dynamic_compose()),
        ("doif", doif()),
        ("map", map()),
        ("for_each", for_each()),
        ("reduce", reduce()),
        ("filter", filter()),
        ("find", find()),
        ("some", some()),
        ("every", every()),
        ("pick", pick()),
        ("omit", omit()),
        ("reverse", reverse()),
        ("flatten", flatten()),
        ("is_empty", is_empty()),
        ("for_in", for_in()),
        ("map_in", map_in()),
        ("props", props()),
        ("not", not()),
        ("equals", equals()),
        ("prop", prop()),
        ("prop_eq", prop_eq()),
    ]
    .into_iter()
    .collect();

    #[cfg(feature = "async")]
    {
        exports.insert("then", crate::deferred::then());
        exports.insert("catch_error", crate::deferred::catch_error());
        exports.insert("then_catch", crate::deferred::then_catch());
    }

    exports
}

/// `curry(function, ...arguments)`.
fn dynamic_curry() -> Function {
    Function::named("curry", 1, |arguments| {
        let function = Function::argument(arguments, 0);
        curry(
            function.as_function()?,
            arguments.get(1..).unwrap_or_default(),
        )
    })
}

/// `pf(arity, method_name)`.
fn dynamic_pf() -> Function {
    Function::named("pf", 2, |arguments| {
        let arity = arity_argument(&Function::argument(arguments, 0))?;
        let method = Function::argument(arguments, 1);
        Ok(Value::from(pf(arity, method.as_str()?)))
    })
}

/// `pipe(...functions)`.
fn dynamic_pipe() -> Function {
    Function::named("pipe", 0, |arguments| {
        Ok(Value::from(pipe(function_arguments(arguments)?)?))
    })
}

/// `compose(...functions)`.
fn dynamic_compose() -> Function {
    Function::named("compose", 0, |arguments| {
        Ok(Value::from(compose(function_arguments(arguments)?)?))
    })
}

fn function_arguments(arguments: &[Value]) -> Result<Vec<Function>> {
    arguments
        .iter()
        .map(|argument| argument.as_function().cloned())
        .collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn arity_argument(arity: &Value) -> Result<usize> {
    let number = arity.as_number()?;
    if number.is_finite()
        && number >= 0.0
        && number.fract() == 0.0
        && number < usize::MAX as f64
    {
        Ok(number as usize)
    } else {
        Err(Error::invalid_argument(
            "pf",
            format!("arity must be a non-negative integer, got {number}"),
        ))
    }
}

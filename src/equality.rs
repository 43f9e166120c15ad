//! SameValue equality and property comparison.
//!
//! [`Value::same_value`] is identity-based: primitives compare by value,
//! compound values (arrays, objects, functions, deferred values) compare by
//! allocation. Two numeric corner cases differ from `==` on `f64`:
//!
//! - `NaN` equals itself
//! - `+0` and `-0` are different
//!
//! # Examples
//!
//! ```rust
//! use fph::equality::equals;
//! use fph::{Value, args};
//!
//! assert_eq!(equals().call(&args![f64::NAN, f64::NAN])?, Value::from(true));
//! assert_eq!(equals().call(&args![0.0, -0.0])?, Value::from(false));
//!
//! let equals_one = equals().call(&args![1])?;
//! assert_eq!(equals_one.call(&args![1])?, Value::from(true));
//! assert_eq!(equals_one.call(&args![2])?, Value::from(false));
//! # Ok::<(), fph::Error>(())
//! ```

use std::sync::Arc;

use crate::value::{Function, Value};

impl Value {
    /// Returns whether `self` and `other` are the same value.
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => same_number(*left, *right),
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => Arc::ptr_eq(left, right),
            (Self::Object(left), Self::Object(right)) => Arc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            #[cfg(feature = "async")]
            (Self::Deferred(left), Self::Deferred(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

#[allow(clippy::float_cmp)]
fn same_number(left: f64, right: f64) -> bool {
    if left == right {
        left != 0.0 || left.is_sign_negative() == right.is_sign_negative()
    } else {
        left.is_nan() && right.is_nan()
    }
}

/// `equals(a, b)`: [`Value::same_value`] as a curried function, arity 2.
pub fn equals() -> Function {
    Function::named("equals", 2, |arguments| {
        let left = Function::argument(arguments, 0);
        let right = Function::argument(arguments, 1);
        Ok(Value::Bool(left.same_value(&right)))
    })
    .curried()
}

/// `prop(name, value)`: [`Value::property`] as a curried function, arity 2.
pub fn prop() -> Function {
    Function::named("prop", 2, |arguments| {
        let name = Function::argument(arguments, 0);
        Function::argument(arguments, 1).property(&property_name(&name))
    })
    .curried()
}

/// `prop_eq(name, expected, value)`: whether `value[name]` is the same value
/// as `expected`. Curried, arity 3.
pub fn prop_eq() -> Function {
    Function::named("prop_eq", 3, |arguments| {
        let name = Function::argument(arguments, 0);
        let expected = Function::argument(arguments, 1);
        let actual = Function::argument(arguments, 2).property(&property_name(&name))?;
        Ok(Value::Bool(expected.same_value(&actual)))
    })
    .curried()
}

/// Property names are compared as strings, so `prop(0, list)` reads index 0.
fn property_name(name: &Value) -> String {
    match name {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

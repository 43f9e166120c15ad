//! Object-shape helpers.
//!
//! Every helper is curried and takes the object last, so partially applied
//! helpers slot into [`pipe`](crate::compose::pipe) chains. Key lists are
//! arrays of strings; non-string entries never match a key. No helper mutates
//! its source object.
//!
//! # Examples
//!
//! ```rust
//! use fph::object::{omit, pick, props};
//! use fph::{args, array, object};
//!
//! let source = object! { "a" => 1, "b" => 2, "c" => 3 };
//!
//! assert_eq!(pick().call(&args![array!["a", "b"], source.clone()])?, object! { "a" => 1, "b" => 2 });
//! assert_eq!(omit().call(&args![array!["a"], source.clone()])?, object! { "b" => 2, "c" => 3 });
//! assert_eq!(props().call(&args![array!["a", "b", "e"], source])?, array![1, 2]);
//! # Ok::<(), fph::Error>(())
//! ```

use crate::error::Result;
use crate::value::{Function, Value};

/// `pick(keys, object)`: a copy holding only the listed keys. Curried, arity 2.
pub fn pick() -> Function {
    Function::named("pick", 2, |arguments| {
        let keys = listed_keys(&Function::argument(arguments, 0))?;
        let source = Function::argument(arguments, 1);
        Ok(Value::from(source.as_object()?.pick(keys)))
    })
    .curried()
}

/// `omit(keys, object)`: a copy without the listed keys. Curried, arity 2.
pub fn omit() -> Function {
    Function::named("omit", 2, |arguments| {
        let keys = listed_keys(&Function::argument(arguments, 0))?;
        let source = Function::argument(arguments, 1);
        Ok(Value::from(source.as_object()?.omit(keys)))
    })
    .curried()
}

/// `props(keys, object)`: the values of the listed keys, in list order, with
/// absent keys dropped. Curried, arity 2.
pub fn props() -> Function {
    Function::named("props", 2, |arguments| {
        let keys = listed_keys(&Function::argument(arguments, 0))?;
        let source = Function::argument(arguments, 1);
        Ok(Value::array(source.as_object()?.props(keys)))
    })
    .curried()
}

/// `for_in(callback, object)`: calls `callback(value, key)` for every entry and
/// returns `undefined`. Curried, arity 2.
pub fn for_in() -> Function {
    Function::named("for_in", 2, |arguments| {
        let callback = Function::argument(arguments, 0);
        let source = Function::argument(arguments, 1);
        for (key, value) in source.as_object()? {
            callback.call(&[value.clone(), Value::from(key.as_str())])?;
        }
        Ok(Value::Undefined)
    })
    .curried()
}

/// `map_in(callback, object)`: an object with the same keys and every value
/// replaced by `callback(value)`. Curried, arity 2.
pub fn map_in() -> Function {
    Function::named("map_in", 2, |arguments| {
        let callback = Function::argument(arguments, 0);
        let source = Function::argument(arguments, 1);
        let mapped = source
            .as_object()?
            .map_values(|value| callback.call(std::slice::from_ref(value)))?;
        Ok(Value::from(mapped))
    })
    .curried()
}

fn listed_keys(keys: &Value) -> Result<Vec<String>> {
    Ok(keys
        .as_array()?
        .iter()
        .filter_map(|key| match key {
            Value::String(text) => Some(text.clone()),
            _ => None,
        })
        .collect())
}

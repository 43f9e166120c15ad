//! Conditional application and pass-through helpers.

use crate::value::{Function, Value};

/// `doif(predicate, function, value)`: returns `function(value)` when
/// `predicate(value)` is truthy, otherwise `value`. Curried, arity 3.
///
/// A falsy `function(value)` also yields `value`, so a falsy result cannot be
/// told apart from a false predicate.
///
/// # Examples
///
/// ```rust
/// use fph::compose::doif;
/// use fph::{Value, args, func};
///
/// let always = func!(|_| Ok(Value::from(true)));
/// let never = func!(|_| Ok(Value::from(false)));
/// let increment = func!(|value| Ok(Value::from(value.as_number()? + 1.0)));
///
/// assert_eq!(doif().call(&args![always, increment.clone(), 1])?, Value::from(2));
/// assert_eq!(doif().call(&args![never, increment, 1])?, Value::from(1));
/// # Ok::<(), fph::Error>(())
/// ```
pub fn doif() -> Function {
    Function::named("doif", 3, |arguments| {
        let predicate = Function::argument(arguments, 0);
        let function = Function::argument(arguments, 1);
        let value = Function::argument(arguments, 2);

        if predicate.call(std::slice::from_ref(&value))?.is_truthy() {
            let result = function.call(std::slice::from_ref(&value))?;
            if result.is_truthy() {
                return Ok(result);
            }
        }
        Ok(value)
    })
    .curried()
}

/// `tap(function, value)`: calls `function(value)` for its side effect and
/// returns `value`. Curried, arity 2.
pub fn tap() -> Function {
    Function::named("tap", 2, |arguments| {
        let function = Function::argument(arguments, 0);
        let value = Function::argument(arguments, 1);
        function.call(std::slice::from_ref(&value))?;
        Ok(value)
    })
    .curried()
}

/// `not(value)`: the boolean negation of the truthiness of `value`.
pub fn not() -> Function {
    Function::named("not", 1, |arguments| {
        Ok(Value::Bool(!Function::argument(arguments, 0).is_truthy()))
    })
}

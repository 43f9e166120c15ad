//! The auto-currying engine.
//!
//! [`curry`] turns a [`Function`] with a declared arity into an acceptor that
//! collects arguments across any number of calls, in any grouping, and runs
//! the function once enough of them have arrived.
//!
//! # Semantics
//!
//! ```text
//! curry(f, xs)        = f(xs)                      if len(xs) >= arity(f)
//! curry(f, xs)(ys)    = curry(f, xs ++ ys)         otherwise
//! ```
//!
//! - Only the declared arity counts. Surplus arguments are forwarded to the
//!   function, never truncated.
//! - Acceptors never run the function. Errors can only surface at the call
//!   that completes saturation, and they propagate unchanged.
//! - Every acceptor owns its accumulated arguments. Extending them copies into
//!   a fresh list, so sibling partial applications never observe each other.
//!
//! # Examples
//!
//! ```rust
//! use fph::{Function, Value, args, curry};
//!
//! let volume = Function::new(3, |arguments| {
//!     let product = arguments
//!         .iter()
//!         .try_fold(1.0, |product, value| Ok::<_, fph::Error>(product * value.as_number()?))?;
//!     Ok(Value::from(product))
//! });
//!
//! let with_width = curry(&volume, &args![2])?;
//! let with_width_height = with_width.call(&args![3])?;
//! assert_eq!(with_width_height.call(&args![4])?, Value::from(24));
//!
//! // Saturating immediately returns the plain result.
//! assert_eq!(curry(&volume, &args![2, 3, 4])?, Value::from(24));
//! # Ok::<(), fph::Error>(())
//! ```

use smallvec::SmallVec;

use crate::error::Result;
use crate::value::{Function, Value};

/// Arguments accumulated by a partial application.
pub type Arguments = SmallVec<[Value; 4]>;

/// Applies `function` to `arguments`, currying when they are not enough.
///
/// Returns the function's result if `arguments.len() >= function.arity()`,
/// otherwise a [`Value::Function`] acceptor waiting for the rest.
///
/// # Errors
///
/// Propagates the error of `function` when this call saturates it.
pub fn curry(function: &Function, arguments: &[Value]) -> Result<Value> {
    if arguments.len() >= function.arity() {
        tracing::trace!(
            function = function.name(),
            arity = function.arity(),
            supplied = arguments.len(),
            "curry saturated"
        );
        function.call(arguments)
    } else {
        Ok(Value::Function(acceptor(
            function.clone(),
            arguments.iter().cloned().collect(),
        )))
    }
}

/// Builds an acceptor: an arity-0 function that appends its arguments to
/// `accumulated` and re-enters [`curry`].
fn acceptor(function: Function, accumulated: Arguments) -> Function {
    let name = function.name().to_string();
    Function::named(name, 0, move |more| {
        let extended: Arguments = accumulated.iter().chain(more).cloned().collect();
        curry(&function, &extended)
    })
}

impl Function {
    /// Returns the curried form of this function.
    ///
    /// The result is an acceptor holding no arguments yet. It is reusable:
    /// each call starts from the same (empty) accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fph::{Value, args, func};
    ///
    /// let add = func!(|first, second| Ok(Value::from(first.as_number()? + second.as_number()?)))
    ///     .curried();
    ///
    /// let add_one = add.call(&args![1])?;
    /// assert_eq!(add_one.call(&args![1])?, Value::from(2));
    /// assert_eq!(add_one.call(&args![41])?, Value::from(42));
    /// assert_eq!(add.call(&args![2, 3])?, Value::from(5));
    /// # Ok::<(), fph::Error>(())
    /// ```
    pub fn curried(&self) -> Self {
        acceptor(self.clone(), Arguments::new())
    }
}

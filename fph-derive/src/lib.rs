//! Procedural macros for fph.
//!
//! # Available Function-like Macros
//!
//! - [`func!`]: Builds an `fph::Function` from a closure literal, deriving
//!   the arity from the number of closure parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use fph::{Value, func};
//!
//! let add = func!(|first, second| Ok(Value::from(first.as_number()? + second.as_number()?)));
//! assert_eq!(add.arity(), 2);
//!
//! let named = func!("increment", |value| Ok(Value::from(value.as_number()? + 1.0)));
//! assert_eq!(named.name(), "increment");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod func;

use proc_macro::TokenStream;

/// Builds an `fph::Function` from a closure literal.
///
/// The arity of the resulting function is the number of closure parameters,
/// fixed at compile time. Each parameter is bound to the positional argument
/// at the same index (or `Value::Undefined` when the caller supplied fewer
/// arguments). The closure body must evaluate to `fph::Result<fph::Value>`.
///
/// # Supported Input Forms
///
/// 1. Closure form: `func!(|a, b| body)`
/// 2. Named form: `func!("name", |a, b| body)`
///
/// Parameters are dynamic values, so type annotations are rejected. Use `_`
/// for a parameter that only counts toward the arity.
///
/// # Example
///
/// ```rust,ignore
/// use fph::{Value, func};
///
/// let greet = func!("greet", |name| Ok(Value::from(format!("hello {name}"))));
/// assert_eq!(greet.call(&[Value::from("fph")])?, Value::from("hello fph"));
/// ```
#[proc_macro]
pub fn func(input: TokenStream) -> TokenStream {
    func::func_impl(input)
}

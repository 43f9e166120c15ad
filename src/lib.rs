//! # fph
//!
//! Point-free functional helpers: an auto-currying engine, a point-free
//! method lifter, and the combinators built on top of them.
//!
//! ## Overview
//!
//! Every combinator is a [`Function`]: a callable with a declared arity that
//! works on dynamic [`Value`]s. Curried functions accept their arguments in
//! any grouping across any number of calls and run once enough have arrived,
//! which makes them easy to partially apply and chain.
//!
//! - **Currying**: [`curry`], [`Function::curried`]
//! - **Point-free lifting**: [`pf`] and the wrappers in [`pointfree`]
//!   (`map`, `for_each`, `reduce`, `filter`, `find`, `some`, `every`)
//! - **Sequencing**: [`compose::pipe`], [`compose::compose`], [`compose::doif`],
//!   [`compose::tap`], [`compose::not`]
//! - **Object shape**: [`object`] (`pick`, `omit`, `props`, `for_in`, `map_in`)
//! - **Lists**: [`list`] (`reverse`, `flatten`, `is_empty`)
//! - **Equality**: [`equality`] (`equals`, `prop`, `prop_eq`)
//! - **Deferred values**: [`deferred`] (`then`, `catch_error`, `then_catch`)
//! - **Aggregate export**: [`library()`]
//!
//! ## Feature Flags
//!
//! - `derive`: the [`func!`] macro (enabled by default)
//! - `async`: [`deferred`] values and adapters (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Mapping`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fph::compose::pipe;
//! use fph::pointfree::{filter, map};
//! use fph::{Value, args, array, func};
//!
//! let is_odd = func!(|value| Ok(Value::from(value.as_number()? % 2.0 == 1.0)));
//! let square = func!(|value| Ok(Value::from(value.as_number()?.powi(2))));
//!
//! let odd_squares = pipe([
//!     filter().call(&args![is_odd])?.as_function()?.clone(),
//!     map().call(&args![square])?.as_function()?.clone(),
//! ])?;
//!
//! assert_eq!(odd_squares.call(&args![array![1, 2, 3, 4, 5]])?, array![1, 9, 25]);
//! # Ok::<(), fph::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as fph;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::{compose, doif, not, pipe, tap};
    pub use crate::curry::curry;
    #[cfg(feature = "async")]
    pub use crate::deferred::{Deferred, catch_error, then, then_catch};
    pub use crate::equality::{equals, prop, prop_eq};
    pub use crate::error::{Error, Result};
    pub use crate::library::library;
    pub use crate::list::{flatten, is_empty, reverse};
    pub use crate::object::{for_in, map_in, omit, pick, props};
    pub use crate::pointfree::{Method, every, filter, find, for_each, map, pf, reduce, some};
    pub use crate::value::{Function, Mapping, Value};
    pub use crate::{args, array, object};

    #[cfg(feature = "derive")]
    pub use crate::func;
}

mod macros;

pub mod compose;
pub mod curry;
#[cfg(feature = "async")]
pub mod deferred;
pub mod equality;
pub mod error;
pub mod library;
pub mod list;
pub mod object;
pub mod pointfree;
pub mod value;

pub use curry::curry;
pub use error::{Error, Result};
pub use library::library;
pub use pointfree::pf;
pub use value::{Function, Mapping, Value};

#[cfg(feature = "derive")]
pub use fph_derive::func;

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function: Send, Sync, Clone);
static_assertions::assert_impl_all!(Error: Send, Sync, Clone, std::error::Error);

//! Function descriptors: a callable body stored together with its arity.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::error::Result;

type Body = dyn Fn(&[Value]) -> Result<Value> + Send + Sync;

const ANONYMOUS: &str = "anonymous";

/// A callable value with a declared arity.
///
/// The arity tells the curry engine how many arguments must accumulate
/// before the body runs. It is supplied explicitly (or derived from the
/// parameter list by the `func!` macro) instead of being inspected at call
/// time. Calling a `Function` directly always runs the body with every
/// supplied argument, whatever the arity says.
///
/// Cloning a `Function` is cheap and yields the same function: clones compare
/// equal and are identical under [`Value::same_value`].
///
/// # Examples
///
/// ```rust
/// use fph::{Function, Value};
///
/// let add = Function::named("add", 2, |arguments| {
///     let first = Function::argument(arguments, 0).as_number()?;
///     let second = Function::argument(arguments, 1).as_number()?;
///     Ok(Value::from(first + second))
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.name(), "add");
/// assert_eq!(add.call(&[Value::from(1), Value::from(2)])?, Value::from(3));
/// # Ok::<(), fph::Error>(())
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Arc<FunctionInner>,
}

struct FunctionInner {
    name: Cow<'static, str>,
    arity: usize,
    body: Box<Body>,
}

impl Function {
    /// Creates an anonymous function expecting `arity` arguments.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self::named(ANONYMOUS, arity, body)
    }

    /// Creates a named function expecting `arity` arguments.
    pub fn named<F>(name: impl Into<Cow<'static, str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(FunctionInner {
                name: name.into(),
                arity,
                body: Box::new(body),
            }),
        }
    }

    /// Returns the declared number of positional parameters.
    pub fn arity(&self) -> usize {
        self.inner.arity
    }

    /// Returns the name given at construction.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Runs the body with `arguments`.
    ///
    /// # Errors
    ///
    /// Propagates whatever error the body returns.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.inner.body)(arguments)
    }

    /// Returns the argument at `index`, or [`Value::Undefined`] when fewer
    /// arguments were supplied.
    pub fn argument(arguments: &[Value], index: usize) -> Value {
        arguments.get(index).cloned().unwrap_or_default()
    }

    /// Returns `true` if both descriptors point to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

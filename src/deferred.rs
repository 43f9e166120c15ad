//! Deferred values and point-free continuation adapters.
//!
//! A [`Deferred`] is a shared, cloneable future settling to
//! `Result<Value, Error>`. Clones observe the same settlement. The library
//! never spawns, cancels or times out a deferred value: continuations
//! attached with [`Deferred::on_settled`] and [`Deferred::recover`] run when the
//! derived value is awaited, on whichever executor awaits it.
//!
//! # Continuation Rules
//!
//! - A missing (or non-function) handler passes the settlement through.
//! - A handler returning a [`Value::Deferred`] is adopted: the derived value
//!   settles like the returned one.
//! - A handler error rejects the derived value.
//! - Rejection handlers receive [`Error::reason`].
//!
//! # Examples
//!
//! ```rust
//! use fph::deferred::{Deferred, catch_error, then};
//! use fph::{Value, args, func};
//!
//! let double = func!(|value| Ok(Value::from(value.as_number()? * 2.0)));
//! let recover = func!(|_| Ok(Value::from(0)));
//!
//! let doubled = then().call(&args![double, Deferred::resolved(21)])?;
//! let recovered = catch_error().call(&args![recover, Deferred::rejected("boom")])?;
//!
//! futures::executor::block_on(async {
//!     assert_eq!(doubled.as_deferred()?.clone().await?, Value::from(42));
//!     assert_eq!(recovered.as_deferred()?.clone().await?, Value::from(0));
//!     Ok::<(), fph::Error>(())
//! })?;
//! # Ok::<(), fph::Error>(())
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt, Shared};

use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// The outcome of a deferred value.
pub type Settlement = Result<Value>;

/// A shared deferred value.
#[derive(Clone)]
pub struct Deferred {
    inner: Shared<BoxFuture<'static, Settlement>>,
}

impl Deferred {
    /// Wraps `future` as a deferred value.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Settlement> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Creates a deferred value already fulfilled with `value`.
    pub fn resolved(value: impl Into<Value>) -> Self {
        Self::new(future::ready(Ok(value.into())))
    }

    /// Creates a deferred value already rejected with `reason`.
    pub fn rejected(reason: impl Into<Value>) -> Self {
        Self::new(future::ready(Err(Error::thrown(reason))))
    }

    /// Derives a deferred value by handling the settlement of `self`.
    pub fn on_settled(&self, on_fulfilled: Option<Value>, on_rejected: Option<Value>) -> Self {
        let source = self.clone();
        let on_fulfilled = on_fulfilled.filter(is_handler);
        let on_rejected = on_rejected.filter(is_handler);

        Self::new(async move {
            let handled = match source.await {
                Ok(value) => match on_fulfilled {
                    Some(handler) => handler.call(&[value])?,
                    None => return Ok(value),
                },
                Err(error) => match on_rejected {
                    Some(handler) => {
                        tracing::debug!(%error, "handling deferred rejection");
                        handler.call(&[error.reason()])?
                    }
                    None => return Err(error),
                },
            };
            adopt(handled).await
        })
    }

    /// Derives a deferred value that recovers from rejection with
    /// `on_rejected`.
    pub fn recover(&self, on_rejected: Value) -> Self {
        self.on_settled(None, Some(on_rejected))
    }

    /// Returns the settlement if it is already known.
    pub fn peek(&self) -> Option<&Settlement> {
        self.inner.peek()
    }

    /// Returns `true` if both handles share the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.inner.ptr_eq(&other.inner)
    }
}

fn is_handler(candidate: &Value) -> bool {
    matches!(candidate, Value::Function(_))
}

async fn adopt(value: Value) -> Settlement {
    match value {
        Value::Deferred(next) => next.await,
        other => Ok(other),
    }
}

impl Future for Deferred {
    type Output = Settlement;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(context)
    }
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Deferred")
            .field("settled", &self.peek().is_some())
            .finish()
    }
}

impl Value {
    /// Returns the deferred value held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not deferred.
    pub fn as_deferred(&self) -> Result<&Deferred> {
        match self {
            Self::Deferred(deferred) => Ok(deferred),
            other => Err(other.mismatch("deferred")),
        }
    }
}

/// `then(on_fulfilled, deferred)`: [`Deferred::on_settled`] without a rejection
/// handler. Curried, arity 2.
pub fn then() -> Function {
    Function::named("then", 2, |arguments| {
        let on_fulfilled = Function::argument(arguments, 0);
        let source = Function::argument(arguments, 1);
        Ok(Value::from(source.as_deferred()?.on_settled(Some(on_fulfilled), None)))
    })
    .curried()
}

/// `catch_error(on_rejected, deferred)`: [`Deferred::recover`]. Curried, arity 2.
pub fn catch_error() -> Function {
    Function::named("catch_error", 2, |arguments| {
        let on_rejected = Function::argument(arguments, 0);
        let source = Function::argument(arguments, 1);
        Ok(Value::from(source.as_deferred()?.recover(on_rejected)))
    })
    .curried()
}

/// `then_catch(on_fulfilled, on_rejected, deferred)`: [`Deferred::on_settled`] with
/// both handlers. Curried, arity 3.
pub fn then_catch() -> Function {
    Function::named("then_catch", 3, |arguments| {
        let on_fulfilled = Function::argument(arguments, 0);
        let on_rejected = Function::argument(arguments, 1);
        let source = Function::argument(arguments, 2);
        Ok(Value::from(
            source
                .as_deferred()?
                .on_settled(Some(on_fulfilled), Some(on_rejected)),
        ))
    })
    .curried()
}

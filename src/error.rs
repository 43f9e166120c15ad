//! Error type shared by every combinator.
//!
//! Errors never get swallowed or retried by the library. They surface at the
//! call that completes saturation of a curried function, never at a call that
//! only extends the accumulated arguments.

use crate::value::Value;

/// Errors raised while applying fph combinators.
///
/// # Examples
///
/// ```rust
/// use fph::{Error, Value};
///
/// let error = Error::MethodNotFound {
///     method: "map".to_string(),
///     receiver: "number",
/// };
/// assert_eq!(error.to_string(), "number has no method `map`");
///
/// let thrown = Error::Thrown(Value::from("boom"));
/// assert_eq!(thrown.reason(), Value::from("boom"));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// An operation received an argument it cannot work with.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A point-free wrapper reached saturation on a receiver that lacks the
    /// requested capability.
    #[error("{receiver} has no method `{method}`")]
    MethodNotFound {
        /// The method that was requested.
        method: String,
        /// The type name of the receiver.
        receiver: &'static str,
    },

    /// A non-function value was called.
    #[error("{found} is not a function")]
    NotCallable {
        /// The type name of the value that was called.
        found: &'static str,
    },

    /// A value had a different type than required.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The required type name.
        expected: &'static str,
        /// The actual type name.
        found: &'static str,
    },

    /// A user function failed with an arbitrary value, or a deferred value was
    /// rejected.
    #[error("thrown: {0}")]
    Thrown(Value),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Thrown`] carrying `reason`.
    pub fn thrown(reason: impl Into<Value>) -> Self {
        Self::Thrown(reason.into())
    }

    /// Returns the value a rejection handler receives for this error.
    ///
    /// Thrown values are handed over as they are; library errors become their
    /// message.
    pub fn reason(&self) -> Value {
        match self {
            Self::Thrown(reason) => reason.clone(),
            other => Value::from(other.to_string()),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

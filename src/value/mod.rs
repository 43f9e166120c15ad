//! Dynamic values flowing through curried functions.
//!
//! Curried and point-free functions accept any number of arguments split
//! across any number of calls, so arguments and results share one dynamic
//! type: [`Value`]. Compound values ([`Value::Array`], [`Value::Object`]) are
//! immutable and shared through [`Arc`]; every combinator that "changes" one
//! of them allocates a fresh copy and leaves its input untouched.
//!
//! # Examples
//!
//! ```rust
//! use fph::{Value, array, object};
//!
//! let list = array![1, 2, 3];
//! assert_eq!(list.type_name(), "array");
//! assert_eq!(list.to_string(), "1,2,3");
//!
//! let record = object! { "name" => "fph", "stars" => 0 };
//! assert_eq!(record.property("name")?, Value::from("fph"));
//! assert!(!Value::from(0).is_truthy());
//! # Ok::<(), fph::Error>(())
//! ```

mod function;
mod mapping;
#[cfg(feature = "serde")]
mod serialization;

use std::fmt;
use std::sync::Arc;

pub use function::Function;
pub use mapping::Mapping;

#[cfg(feature = "async")]
use crate::deferred::Deferred;
use crate::error::{Error, Result};

/// A dynamically typed value.
///
/// `PartialEq` is structural (deep) equality. For identity-based SameValue
/// comparison use [`Value::same_value`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent value. Missing arguments read as `Undefined`.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An immutable, shared sequence.
    Array(Arc<[Value]>),
    /// An immutable, shared mapping.
    Object(Arc<Mapping>),
    /// A callable function descriptor.
    Function(Function),
    /// A shared deferred value.
    #[cfg(feature = "async")]
    Deferred(Deferred),
}

impl Value {
    /// Builds an array value from any sequence of convertible items.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Returns the type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            #[cfg(feature = "async")]
            Self::Deferred(_) => "deferred",
        }
    }

    /// Returns whether the value counts as true in a boolean context.
    ///
    /// `false`, `0`, `-0`, `NaN`, the empty string, `null` and `undefined`
    /// are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            _ => true,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the number held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a number.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Self::Number(number) => Ok(*number),
            other => Err(other.mismatch("number")),
        }
    }

    /// Returns the boolean held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(flag) => Ok(*flag),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Returns the string held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a string.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::String(text) => Ok(text),
            other => Err(other.mismatch("string")),
        }
    }

    /// Returns the elements of an array value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn as_array(&self) -> Result<&[Self]> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(other.mismatch("array")),
        }
    }

    /// Returns the mapping of an object value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an object.
    pub fn as_object(&self) -> Result<&Mapping> {
        match self {
            Self::Object(mapping) => Ok(mapping),
            other => Err(other.mismatch("object")),
        }
    }

    /// Returns the function descriptor held by this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCallable`] if the value is not a function.
    pub fn as_function(&self) -> Result<&Function> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(Error::NotCallable {
                found: other.type_name(),
            }),
        }
    }

    /// Calls this value as a function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotCallable`] if the value is not a function, or
    /// whatever error the function itself raises.
    pub fn call(&self, arguments: &[Self]) -> Result<Self> {
        self.as_function()?.call(arguments)
    }

    /// Reads the property `name` of this value.
    ///
    /// Objects expose their entries; arrays and strings expose `length` and
    /// their indices. Any other property reads as [`Value::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when reading from `null` or
    /// `undefined`.
    pub fn property(&self, name: &str) -> Result<Self> {
        let found = match self {
            Self::Undefined | Self::Null => {
                return Err(Error::invalid_argument(
                    "prop",
                    format!("cannot read property `{name}` of {}", self.type_name()),
                ));
            }
            Self::Object(mapping) => mapping.get(name).cloned(),
            Self::Array(items) if name == "length" => Some(Self::from(items.len())),
            Self::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index).cloned()),
            Self::String(text) if name == "length" => Some(Self::from(text.chars().count())),
            Self::String(text) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| text.chars().nth(index))
                .map(|character| Self::from(character.to_string())),
            _ => None,
        };
        Ok(found.unwrap_or_default())
    }

    pub(crate) fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }
}

/// Formats a number the way a script host prints it: integral values without
/// a fractional part, `NaN`, and `Infinity`.
fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if number == 0.0 {
        "0".to_string()
    } else if number.fract() == 0.0 && number.abs() < 1e21 {
        format!("{number:.0}")
    } else {
        format!("{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => formatter.write_str(&format_number(*number)),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !matches!(item, Self::Undefined | Self::Null) {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(function) => write!(formatter, "function {}", function.name()),
            #[cfg(feature = "async")]
            Self::Deferred(_) => formatter.write_str("[object Deferred]"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Object(Arc::new(mapping))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

#[cfg(feature = "async")]
impl From<Deferred> for Value {
    fn from(deferred: Deferred) -> Self {
        Self::Deferred(deferred)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::Array(iterator.into_iter().collect())
    }
}

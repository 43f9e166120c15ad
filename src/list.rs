//! String and array helpers.
//!
//! # Examples
//!
//! ```rust
//! use fph::list::{flatten, is_empty, reverse};
//! use fph::{Value, args, array, object};
//!
//! assert_eq!(reverse().call(&args!["hello"])?, Value::from("olleh"));
//! assert_eq!(reverse().call(&args![array![1, 2, 3]])?, array![3, 2, 1]);
//! assert!(reverse().call(&args![object! { "a" => 1 }]).is_err());
//!
//! assert_eq!(flatten().call(&args![array![array![1], array![2]]])?, array![1, 2]);
//!
//! assert_eq!(is_empty().call(&args![array![]])?, Value::from(true));
//! assert_eq!(is_empty().call(&args![object! {}])?, Value::from(false));
//! # Ok::<(), fph::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::value::{Function, Value};

impl Value {
    /// Returns a reversed copy of a string (by character) or an array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other value.
    pub fn reversed(&self) -> Result<Self> {
        match self {
            Self::String(text) => Ok(Self::String(text.chars().rev().collect())),
            Self::Array(items) => Ok(Self::Array(items.iter().rev().cloned().collect())),
            _ => Err(Error::invalid_argument("reverse", "Invalid argument.")),
        }
    }

    /// Concatenates the elements of an array one level deep.
    ///
    /// Array elements are spliced in; any other element is kept as it is.
    /// Deeper nesting is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `self` is not an array.
    pub fn flattened(&self) -> Result<Self> {
        let mut flat = Vec::new();
        for item in self.as_array()? {
            match item {
                Self::Array(inner) => flat.extend(inner.iter().cloned()),
                other => flat.push(other.clone()),
            }
        }
        Ok(Self::Array(flat.into()))
    }

    /// Returns `true` only for an array without elements.
    pub fn is_empty_array(&self) -> bool {
        matches!(self, Self::Array(items) if items.is_empty())
    }
}

/// `reverse(list)`: [`Value::reversed`] as a function, arity 1.
pub fn reverse() -> Function {
    Function::named("reverse", 1, |arguments| {
        Function::argument(arguments, 0).reversed()
    })
}

/// `flatten(list)`: [`Value::flattened`] as a function, arity 1.
pub fn flatten() -> Function {
    Function::named("flatten", 1, |arguments| {
        Function::argument(arguments, 0).flattened()
    })
}

/// `is_empty(value)`: [`Value::is_empty_array`] as a function, arity 1.
pub fn is_empty() -> Function {
    Function::named("is_empty", 1, |arguments| {
        Ok(Value::Bool(Function::argument(arguments, 0).is_empty_array()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_reverse_keeps_multibyte_characters() {
        assert_eq!(Value::from("añb").reversed().unwrap(), Value::from("bña"));
    }

    #[rstest]
    #[case(Value::from(1))]
    #[case(Value::Null)]
    #[case(Value::Undefined)]
    fn test_reverse_rejects_other_types(#[case] value: Value) {
        let error = value.reversed().unwrap_err();
        assert_eq!(error.to_string(), "reverse: Invalid argument.");
    }

    #[rstest]
    fn test_reverse_does_not_touch_source() {
        let source = Value::array([1, 2, 3]);
        let reversed = source.reversed().unwrap();
        assert_eq!(source, Value::array([1, 2, 3]));
        assert_eq!(reversed, Value::array([3, 2, 1]));
    }

    #[rstest]
    fn test_flatten_is_one_level_deep() {
        let nested = Value::array([
            Value::array([Value::from(1), Value::array([2])]),
            Value::from(3),
        ]);
        assert_eq!(
            nested.flattened().unwrap(),
            Value::array([Value::from(1), Value::array([2]), Value::from(3)])
        );
    }

    #[rstest]
    fn test_flatten_requires_array() {
        assert!(Value::from("ab").flattened().is_err());
    }

    #[rstest]
    #[case(Value::array(Vec::<Value>::new()), true)]
    #[case(Value::array([1]), false)]
    #[case(Value::from(""), false)]
    #[case(Value::Null, false)]
    fn test_is_empty_array(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_empty_array(), expected);
    }
}

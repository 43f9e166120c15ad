//! Capabilities a dispatch target can offer to point-free wrappers.
//!
//! Each trait names one family of methods. Built-in receivers implement the
//! traits they support: arrays are [`Mappable`], [`Iterable`], [`Reducible`],
//! [`Filterable`] and [`Searchable`]; strings implement [`TextCase`].
//!
//! Callbacks are called with `(element, index, array)`; reducers with
//! `(accumulator, element, index, array)`.

use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

/// Receivers that can produce a transformed copy element by element.
pub trait Mappable {
    /// Returns a new array of `callback` results.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first callback error.
    fn map_with(&self, callback: &Value) -> Result<Value>;
}

/// Receivers that can be visited element by element.
pub trait Iterable {
    /// Calls `callback` for every element and returns `undefined`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first callback error.
    fn for_each_with(&self, callback: &Value) -> Result<Value>;
}

/// Receivers that can be folded into one value.
pub trait Reducible {
    /// Folds the elements left to right starting from `initial`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first reducer error.
    fn reduce_with(&self, reducer: &Value, initial: Value) -> Result<Value>;
}

/// Receivers whose elements can be selected by a predicate.
pub trait Filterable {
    /// Returns a new array of the elements for which `predicate` is truthy.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first predicate error.
    fn filter_with(&self, predicate: &Value) -> Result<Value>;

    /// Returns the first element for which `predicate` is truthy, or
    /// `undefined`.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first predicate error.
    fn find_with(&self, predicate: &Value) -> Result<Value>;
}

/// Receivers that can be tested with a predicate.
pub trait Searchable {
    /// Returns whether `predicate` is truthy for at least one element.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first predicate error.
    fn some_with(&self, predicate: &Value) -> Result<Value>;

    /// Returns whether `predicate` is truthy for every element.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first predicate error.
    fn every_with(&self, predicate: &Value) -> Result<Value>;
}

/// Receivers with letter case.
pub trait TextCase {
    /// Returns the upper-case copy.
    fn to_upper_case(&self) -> Value;

    /// Returns the lower-case copy.
    fn to_lower_case(&self) -> Value;
}

type Array = Arc<[Value]>;

fn call_with_element(callback: &Value, items: &Array, index: usize, element: &Value) -> Result<Value> {
    callback.call(&[
        element.clone(),
        Value::from(index),
        Value::Array(Arc::clone(items)),
    ])
}

fn test_element(predicate: &Value, items: &Array, index: usize, element: &Value) -> Result<bool> {
    call_with_element(predicate, items, index, element).map(|verdict| verdict.is_truthy())
}

impl Mappable for Array {
    fn map_with(&self, callback: &Value) -> Result<Value> {
        self.iter()
            .enumerate()
            .map(|(index, element)| call_with_element(callback, self, index, element))
            .collect()
    }
}

impl Iterable for Array {
    fn for_each_with(&self, callback: &Value) -> Result<Value> {
        for (index, element) in self.iter().enumerate() {
            call_with_element(callback, self, index, element)?;
        }
        Ok(Value::Undefined)
    }
}

impl Reducible for Array {
    fn reduce_with(&self, reducer: &Value, initial: Value) -> Result<Value> {
        self.iter()
            .enumerate()
            .try_fold(initial, |accumulator, (index, element)| {
                reducer.call(&[
                    accumulator,
                    element.clone(),
                    Value::from(index),
                    Value::Array(Arc::clone(self)),
                ])
            })
    }
}

impl Filterable for Array {
    fn filter_with(&self, predicate: &Value) -> Result<Value> {
        let mut kept = Vec::new();
        for (index, element) in self.iter().enumerate() {
            if test_element(predicate, self, index, element)? {
                kept.push(element.clone());
            }
        }
        Ok(Value::Array(kept.into()))
    }

    fn find_with(&self, predicate: &Value) -> Result<Value> {
        for (index, element) in self.iter().enumerate() {
            if test_element(predicate, self, index, element)? {
                return Ok(element.clone());
            }
        }
        Ok(Value::Undefined)
    }
}

impl Searchable for Array {
    fn some_with(&self, predicate: &Value) -> Result<Value> {
        for (index, element) in self.iter().enumerate() {
            if test_element(predicate, self, index, element)? {
                return Ok(Value::Bool(true));
            }
        }
        Ok(Value::Bool(false))
    }

    fn every_with(&self, predicate: &Value) -> Result<Value> {
        for (index, element) in self.iter().enumerate() {
            if !test_element(predicate, self, index, element)? {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    }
}

impl TextCase for String {
    fn to_upper_case(&self) -> Value {
        Value::from(self.to_uppercase())
    }

    fn to_lower_case(&self) -> Value {
        Value::from(self.to_lowercase())
    }
}

impl Value {
    /// Returns the [`Mappable`] view of this value, if it has one.
    pub fn as_mappable(&self) -> Option<&dyn Mappable> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`Iterable`] view of this value, if it has one.
    pub fn as_iterable(&self) -> Option<&dyn Iterable> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`Reducible`] view of this value, if it has one.
    pub fn as_reducible(&self) -> Option<&dyn Reducible> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`Filterable`] view of this value, if it has one.
    pub fn as_filterable(&self) -> Option<&dyn Filterable> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`Searchable`] view of this value, if it has one.
    pub fn as_searchable(&self) -> Option<&dyn Searchable> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`TextCase`] view of this value, if it has one.
    pub fn as_text_case(&self) -> Option<&dyn TextCase> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

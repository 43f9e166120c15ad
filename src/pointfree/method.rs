//! Names of the capabilities a point-free wrapper dispatches to.

use std::fmt;

use crate::error::{Error, Result};
use crate::value::{Function, Value};

/// A capability invoked on the dispatch target of a point-free wrapper.
///
/// Built-in variants resolve through the capability traits of the receiver.
/// [`Method::Named`] (and any built-in variant on an object receiver) looks up
/// a callable property with the method's name, which lets plain objects act as
/// third-party receivers.
///
/// # Examples
///
/// ```rust
/// use fph::pointfree::Method;
///
/// assert_eq!(Method::from("map"), Method::Map);
/// assert_eq!(Method::from("toUpperCase"), Method::ToUpperCase);
/// assert_eq!(Method::from("greet"), Method::Named("greet".to_string()));
/// assert_eq!(Method::ForEach.name(), "forEach");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// [`Mappable::map_with`].
    Map,
    /// [`Iterable::for_each_with`].
    ForEach,
    /// [`Reducible::reduce_with`].
    Reduce,
    /// [`Filterable::filter_with`].
    Filter,
    /// [`Filterable::find_with`].
    Find,
    /// [`Searchable::some_with`].
    Some,
    /// [`Searchable::every_with`].
    Every,
    /// [`TextCase::to_upper_case`].
    ToUpperCase,
    /// [`TextCase::to_lower_case`].
    ToLowerCase,
    /// The display string of any value except `null` and `undefined`.
    ToString,
    /// A callable property of an object receiver.
    Named(String),
}

impl Method {
    /// Returns the method name as written at call sites.
    pub fn name(&self) -> &str {
        match self {
            Self::Map => "map",
            Self::ForEach => "forEach",
            Self::Reduce => "reduce",
            Self::Filter => "filter",
            Self::Find => "find",
            Self::Some => "some",
            Self::Every => "every",
            Self::ToUpperCase => "toUpperCase",
            Self::ToLowerCase => "toLowerCase",
            Self::ToString => "toString",
            Self::Named(name) => name,
        }
    }

    /// Invokes this method on `receiver` with positional `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodNotFound`] if `receiver` lacks the capability,
    /// or the error raised by the method itself.
    pub fn invoke(&self, receiver: &Value, arguments: &[Value]) -> Result<Value> {
        if let Value::Object(mapping) = receiver
            && let Some(Value::Function(property)) = mapping.get(self.name())
        {
            return property.call(arguments);
        }

        let argument = |index| Function::argument(arguments, index);
        let outcome = match self {
            Self::Map => receiver
                .as_mappable()
                .map(|target| target.map_with(&argument(0))),
            Self::ForEach => receiver
                .as_iterable()
                .map(|target| target.for_each_with(&argument(0))),
            Self::Reduce => receiver
                .as_reducible()
                .map(|target| target.reduce_with(&argument(0), argument(1))),
            Self::Filter => receiver
                .as_filterable()
                .map(|target| target.filter_with(&argument(0))),
            Self::Find => receiver
                .as_filterable()
                .map(|target| target.find_with(&argument(0))),
            Self::Some => receiver
                .as_searchable()
                .map(|target| target.some_with(&argument(0))),
            Self::Every => receiver
                .as_searchable()
                .map(|target| target.every_with(&argument(0))),
            Self::ToUpperCase => receiver
                .as_text_case()
                .map(|target| Ok(target.to_upper_case())),
            Self::ToLowerCase => receiver
                .as_text_case()
                .map(|target| Ok(target.to_lower_case())),
            Self::ToString => match receiver {
                Value::Undefined | Value::Null => None,
                other => Some(Ok(Value::from(other.to_string()))),
            },
            Self::Named(_) => None,
        };

        outcome.unwrap_or_else(|| {
            Err(Error::MethodNotFound {
                method: self.name().to_string(),
                receiver: receiver.type_name(),
            })
        })
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        match name {
            "map" => Self::Map,
            "forEach" => Self::ForEach,
            "reduce" => Self::Reduce,
            "filter" => Self::Filter,
            "find" => Self::Find,
            "some" => Self::Some,
            "every" => Self::Every,
            "toUpperCase" => Self::ToUpperCase,
            "toLowerCase" => Self::ToLowerCase,
            "toString" => Self::ToString,
            other => Self::Named(other.to_string()),
        }
    }
}

impl From<String> for Method {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;
    use rstest::rstest;

    #[rstest]
    #[case("map", Method::Map)]
    #[case("forEach", Method::ForEach)]
    #[case("reduce", Method::Reduce)]
    #[case("filter", Method::Filter)]
    #[case("find", Method::Find)]
    #[case("some", Method::Some)]
    #[case("every", Method::Every)]
    #[case("toUpperCase", Method::ToUpperCase)]
    #[case("toLowerCase", Method::ToLowerCase)]
    #[case("toString", Method::ToString)]
    fn test_name_round_trips(#[case] name: &str, #[case] method: Method) {
        assert_eq!(Method::from(name), method);
        assert_eq!(method.name(), name);
    }

    #[rstest]
    fn test_to_string_of_number() {
        let result = Method::ToString.invoke(&Value::from(3), &[]).unwrap();
        assert_eq!(result, Value::from("3"));
    }

    #[rstest]
    fn test_to_string_of_null_is_missing() {
        let error = Method::ToString.invoke(&Value::Null, &[]).unwrap_err();
        assert_eq!(
            error,
            Error::MethodNotFound {
                method: "toString".to_string(),
                receiver: "null",
            }
        );
    }

    #[rstest]
    fn test_object_property_takes_precedence() {
        let mut receiver = Mapping::new();
        receiver.insert(
            "map",
            Function::new(1, |_| Ok(Value::from("custom map"))),
        );
        let result = Method::Map
            .invoke(&Value::from(receiver), &[Value::Null])
            .unwrap();
        assert_eq!(result, Value::from("custom map"));
    }

    #[rstest]
    fn test_named_method_on_object() {
        let mut receiver = Mapping::new();
        receiver.insert(
            "double",
            Function::new(1, |arguments| {
                Ok(Value::from(Function::argument(arguments, 0).as_number()? * 2.0))
            }),
        );
        let result = Method::from("double")
            .invoke(&Value::from(receiver), &[Value::from(21)])
            .unwrap();
        assert_eq!(result, Value::from(42));
    }

    #[rstest]
    fn test_non_callable_property_is_missing() {
        let mut receiver = Mapping::new();
        receiver.insert("double", 2);
        let error = Method::from("double")
            .invoke(&Value::from(receiver), &[])
            .unwrap_err();
        assert!(matches!(error, Error::MethodNotFound { receiver: "object", .. }));
    }

    #[rstest]
    fn test_upper_case_on_array_is_missing() {
        let error = Method::ToUpperCase
            .invoke(&Value::array([1]), &[])
            .unwrap_err();
        assert!(matches!(error, Error::MethodNotFound { .. }));
    }
}

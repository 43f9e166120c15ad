//! Value construction macros.

/// Builds a [`Value::Array`](crate::Value::Array) from convertible elements.
///
/// ```rust
/// use fph::{Value, array};
///
/// let list = array![1, "two", array![3]];
/// assert_eq!(list.as_array()?.len(), 3);
/// assert_eq!(array![], Value::array(Vec::<Value>::new()));
/// # Ok::<(), fph::Error>(())
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::array(::std::iter::empty::<$crate::Value>())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Value::array([$($crate::Value::from($element)),+])
    };
}

/// Builds a [`Value::Object`](crate::Value::Object) from `key => value` pairs.
///
/// ```rust
/// use fph::{Value, object};
///
/// let record = object! { "name" => "fph", "tags" => fph::array!["fp"] };
/// assert_eq!(record.property("name")?, Value::from("fph"));
/// # Ok::<(), fph::Error>(())
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::from($crate::Mapping::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key, $value);
        )+
        $crate::Value::from(mapping)
    }};
}

/// Builds an argument list (an array of [`Value`](crate::Value)s) for
/// [`Function::call`](crate::Function::call).
///
/// ```rust
/// use fph::{Value, args};
///
/// let arguments = args![1, "two"];
/// assert_eq!(arguments, [Value::from(1), Value::from("two")]);
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Value; 0] = [];
        empty
    }};
    ($($argument:expr),+ $(,)?) => {
        [$($crate::Value::from($argument)),+]
    };
}

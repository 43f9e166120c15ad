//! String-keyed mappings backing object values.

use indexmap::IndexMap;
use indexmap::map;

use super::Value;

/// A mapping from unique string keys to values, iterated in insertion order.
///
/// Equality ignores order: two mappings are equal when they hold the same
/// entries.
///
/// All shape helpers ([`Mapping::pick`], [`Mapping::omit`],
/// [`Mapping::props`], [`Mapping::map_values`]) return fresh data and never
/// mutate `self`.
///
/// # Examples
///
/// ```rust
/// use fph::{Mapping, Value};
///
/// let source: Mapping = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
///
/// let picked = source.pick(["a", "b"]);
/// assert_eq!(picked.len(), 2);
/// assert_eq!(source.len(), 3);
///
/// assert_eq!(source.props(["c", "missing", "a"]), vec![Value::from(3), Value::from(1)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts an entry, returning the previous value under `key`.
    ///
    /// A new key goes last; replacing a value keeps the key's position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns a copy holding only the entries whose key is listed, in the
    /// order of `self`.
    ///
    /// Listed keys missing from the mapping are ignored.
    pub fn pick<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let listed = collect_keys(keys);
        self.retain_copy(|key| listed.iter().any(|candidate| candidate == key))
    }

    /// Returns a copy without the entries whose key is listed.
    pub fn omit<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let listed = collect_keys(keys);
        self.retain_copy(|key| !listed.iter().any(|candidate| candidate == key))
    }

    /// Returns the values of the listed keys in the order they are listed,
    /// silently skipping keys absent from the mapping.
    pub fn props<I>(&self, keys: I) -> Vec<Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter()
            .filter_map(|key| self.get(key.as_ref()).cloned())
            .collect()
    }

    /// Returns a mapping with the same keys and every value transformed.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by `transform`.
    pub fn map_values<F, E>(&self, mut transform: F) -> Result<Self, E>
    where
        F: FnMut(&Value) -> Result<Value, E>,
    {
        self.entries
            .iter()
            .map(|(key, value)| Ok((key.clone(), transform(value)?)))
            .collect::<Result<IndexMap<_, _>, E>>()
            .map(|entries| Self { entries })
    }

    fn retain_copy(&self, keep: impl Fn(&str) -> bool) -> Self {
        self.entries
            .iter()
            .filter(|(key, _)| keep(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn collect_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keys.into_iter().map(|key| key.as_ref().to_string()).collect()
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self {
            entries: iterator
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

//! Ordered parameter map for header values.
//!
//! [`ParamMap`] is a thin wrapper around [`IndexMap`] that keeps parameters
//! in first-seen order and aggregates repeated names: the first occurrence
//! of a name fixes its position and holds a scalar value; a repeat promotes
//! the scalar to an ordered list and later repeats append to it.
//!
//! Keys and values borrow from the header being parsed; nothing is copied
//! or unescaped.
//!
//! ## Examples
//!
//! ```rust
//! use lexform::http::content_type;
//!
//! let media = content_type::parse("text/html; a=1; b=2; a=3").unwrap();
//! assert_eq!(media.param.get("a").unwrap().as_list(), ["1", "3"]);
//! assert_eq!(media.param.get("b").unwrap().as_str(), Some("2"));
//! ```

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// A parameter value: a scalar for a unique name, an ordered list for a
/// repeated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue<'a> {
    One(&'a str),
    Many(Vec<&'a str>),
}

impl<'a> ParamValue<'a> {
    /// The scalar value, or `None` when the name was repeated.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            ParamValue::One(value) => Some(value),
            ParamValue::Many(_) => None,
        }
    }

    /// All values in occurrence order; a scalar yields a single element.
    #[must_use]
    pub fn as_list(&self) -> Vec<&'a str> {
        match self {
            ParamValue::One(value) => vec![value],
            ParamValue::Many(values) => values.clone(),
        }
    }
}

/// An insertion-ordered map from parameter name to [`ParamValue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParamMap<'a>(IndexMap<&'a str, ParamValue<'a>>);

impl<'a> ParamMap<'a> {
    #[must_use]
    pub fn new() -> Self {
        ParamMap(IndexMap::new())
    }

    /// Records one `name=value` occurrence, aggregating repeats.
    pub fn push(&mut self, name: &'a str, value: &'a str) {
        match self.0.entry(name) {
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                match slot {
                    ParamValue::One(first) => {
                        let first = *first;
                        *slot = ParamValue::Many(vec![first, value]);
                    }
                    ParamValue::Many(values) => values.push(value),
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(ParamValue::One(value));
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue<'a>> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter names in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &&'a str> {
        self.0.keys()
    }

    /// `(name, value)` pairs in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, &'a str, ParamValue<'a>> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for ParamMap<'a> {
    type Item = (&'a str, ParamValue<'a>);
    type IntoIter = indexmap::map::IntoIter<&'a str, ParamValue<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ParamMap<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(pairs: T) -> Self {
        let mut map = ParamMap::new();
        for (name, value) in pairs {
            map.push(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_until_repeated() {
        let mut map = ParamMap::new();
        map.push("charset", "utf-8");
        assert_eq!(map.get("charset"), Some(&ParamValue::One("utf-8")));

        map.push("charset", "ascii");
        assert_eq!(
            map.get("charset"),
            Some(&ParamValue::Many(vec!["utf-8", "ascii"]))
        );

        map.push("charset", "latin1");
        assert_eq!(
            map.get("charset"),
            Some(&ParamValue::Many(vec!["utf-8", "ascii", "latin1"]))
        );
    }

    #[test]
    fn first_occurrence_fixes_order() {
        let map: ParamMap<'_> = [("b", "1"), ("a", "2"), ("b", "3"), ("c", "4")]
            .into_iter()
            .collect();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn serializes_as_object_with_arrays_for_repeats() {
        let map: ParamMap<'_> = [("a", "1"), ("b", "x"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"a": ["1", "2"], "b": "x"}));
    }
}

//! Conjunctive property matching over elements with named properties.
//!
//! Dynamically typed collection libraries express this as pair-set inclusion
//! between two maps. Statically, it becomes a trait seam: an element exposes
//! its properties through [`PropertyAccess`], and a [`PropertySpec`] matches
//! when every one of its pairs is present, with an equal value, among the
//! element's own.

use std::collections::{BTreeMap, HashMap};

use crate::sequence::Sequence;

/// Access to an element's named properties.
///
/// Implemented for the standard string-keyed maps; implement it for your own
/// record types to use [`filter_where`](Sequence::filter_where),
/// [`find_where`](Sequence::find_where), and [`pluck`](Sequence::pluck).
///
/// # Examples
///
/// ```rust
/// use consfold::algebra::PropertyAccess;
///
/// struct Shape {
///     color: &'static str,
///     kind: &'static str,
/// }
///
/// impl PropertyAccess for Shape {
///     type Value = &'static str;
///
///     fn property(&self, key: &str) -> Option<&Self::Value> {
///         match key {
///             "color" => Some(&self.color),
///             "kind" => Some(&self.kind),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait PropertyAccess {
    /// The type of property values.
    type Value;

    /// Returns the value of the property named `key`, or `None` if the
    /// element has no such property.
    fn property(&self, key: &str) -> Option<&Self::Value>;
}

impl<V> PropertyAccess for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> PropertyAccess for HashMap<String, V> {
    type Value = V;

    fn property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

/// A conjunctive property filter: a set of key/value pairs with unique keys.
///
/// An element matches when every pair is present among its own properties
/// with an equal value — the spec's pairs form a subset of the element's.
/// An empty spec matches everything.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use consfold::algebra::PropertySpec;
///
/// let spec = PropertySpec::new().with("shape", "circle");
///
/// let mut element = BTreeMap::new();
/// element.insert("shape".to_string(), "circle");
/// element.insert("color".to_string(), "purple");
///
/// assert!(spec.matches(&element));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertySpec<V> {
    entries: Vec<(String, V)>,
}

impl<V> PropertySpec<V> {
    /// Creates an empty spec (which matches every element).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a required key/value pair, replacing any existing pair with the
    /// same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        let key = key.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Returns the number of required pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the spec requires nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the required `(key, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns `true` if every required pair exists among the element's
    /// properties with an equal value.
    pub fn matches<E>(&self, element: &E) -> bool
    where
        V: PartialEq,
        E: PropertyAccess<Value = V>,
    {
        self.entries
            .iter()
            .all(|(key, expected)| element.property(key) == Some(expected))
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PropertySpec<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |spec, (key, value)| spec.with(key, value))
    }
}

// =============================================================================
// Property-Matching Operations
// =============================================================================

impl<T: PropertyAccess> Sequence<T> {
    /// Keeps the elements whose properties are a superset of the spec's
    /// pairs, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use consfold::algebra::PropertySpec;
    /// use consfold::sequence::Sequence;
    ///
    /// let record = |color: &str, shape: &str| {
    ///     BTreeMap::from([
    ///         ("color".to_string(), color.to_string()),
    ///         ("shape".to_string(), shape.to_string()),
    ///     ])
    /// };
    /// let records = Sequence::from_slice(&[
    ///     record("purple", "circle"),
    ///     record("red", "triangle"),
    ///     record("blue", "circle"),
    /// ]);
    ///
    /// let circles = records.filter_where(&PropertySpec::new().with("shape", "circle".to_string()));
    /// assert_eq!(circles.len(), 2);
    /// assert_eq!(circles.head().unwrap().get("color"), Some(&"purple".to_string()));
    /// ```
    #[must_use]
    pub fn filter_where(&self, properties: &PropertySpec<T::Value>) -> Self
    where
        T: Clone,
        T::Value: PartialEq,
    {
        self.filter(|element| properties.matches(element))
    }

    /// Returns the first element whose properties are a superset of the
    /// spec's pairs, or `None`.
    #[must_use]
    pub fn find_where(&self, properties: &PropertySpec<T::Value>) -> Option<&T>
    where
        T::Value: PartialEq,
    {
        self.find(|element| properties.matches(element))
    }

    /// Reads one property from every element.
    ///
    /// A [`map`](Sequence::map): each element becomes the value of its `key`
    /// property, or `None` where the element lacks it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    ///
    /// use consfold::sequence::Sequence;
    ///
    /// let records = Sequence::from_slice(&[
    ///     BTreeMap::from([("name".to_string(), "moe")]),
    ///     BTreeMap::from([("name".to_string(), "larry")]),
    /// ]);
    ///
    /// let names = records.pluck("name");
    /// assert_eq!(names, Sequence::from_slice(&[Some("moe"), Some("larry")]));
    /// ```
    #[must_use]
    pub fn pluck(&self, key: &str) -> Sequence<Option<T::Value>>
    where
        T::Value: Clone,
    {
        self.map(|element| element.property(key).cloned())
    }
}

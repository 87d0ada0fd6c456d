//! Field map and field selectors
//!
//! A [`FieldMap`] is the flat `name -> raw value` mapping a session validates.
//! A [`FieldSelector`] names one or more of its fields, in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// FIELD MAP
// ============================================================================

/// Flat mapping from field name to raw input value.
///
/// A key can be present with no value (`None`), which the presence rules
/// treat the same way as a missing key. Rules may rewrite the value of an
/// existing key (trimming) but never add or remove keys.
///
/// Serializes as a flat JSON object whose values are strings or `null`.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::FieldMap;
///
/// let fields = FieldMap::from_iter([("email", "a@b.com"), ("age", "17")]);
/// assert_eq!(fields.get("age"), Some("17"));
/// assert!(!fields.contains("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    entries: IndexMap<String, Option<String>>,
}

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(name.into(), value.into().0);
    }

    /// Returns the value of a field, or `None` when the key is missing or
    /// holds no value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Option::as_deref)
    }

    /// Returns the value of a field, reading missing values as `""`.
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Returns `true` if the key exists and holds a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns `true` if the key exists at all, with or without a value.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Overwrites the value of an existing key. Missing keys are left alone.
    pub(crate) fn rewrite(&mut self, name: &str, value: String) {
        if let Some(slot) = self.entries.get_mut(name) {
            *slot = Some(value);
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// A raw field value as supplied by the caller: a string or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue(Option<String>);

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self(Some(value.to_owned()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self(Some(value.clone()))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self(None), Into::into)
    }
}

// ============================================================================
// FIELD SELECTOR
// ============================================================================

/// One field name or an ordered list of field names.
///
/// Most selectors name a handful of fields, so names are kept inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector<'a> {
    names: SmallVec<[&'a str; 4]>,
}

impl<'a> FieldSelector<'a> {
    /// Field names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Iterates over the field names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }

    /// Number of selected fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no field is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> From<&'a str> for FieldSelector<'a> {
    fn from(name: &'a str) -> Self {
        Self {
            names: smallvec::smallvec![name],
        }
    }
}

impl<'a> From<&'a String> for FieldSelector<'a> {
    fn from(name: &'a String) -> Self {
        Self::from(name.as_str())
    }
}

impl<'a> From<&[&'a str]> for FieldSelector<'a> {
    fn from(names: &[&'a str]) -> Self {
        Self {
            names: SmallVec::from_slice(names),
        }
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for FieldSelector<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> From<&[&'a str; N]> for FieldSelector<'a> {
    fn from(names: &[&'a str; N]) -> Self {
        Self::from(names.as_slice())
    }
}

impl<'a> From<Vec<&'a str>> for FieldSelector<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Self {
            names: SmallVec::from_vec(names),
        }
    }
}

/// Turns a single field name or a list of names into an ordered selector.
///
/// A single name becomes a one-element selector; lists keep their order.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::normalize_selector;
///
/// assert_eq!(normalize_selector("email").names(), &["email"]);
/// assert_eq!(normalize_selector(["b", "a"]).names(), &["b", "a"]);
/// ```
#[must_use]
pub fn normalize_selector<'a>(input: impl Into<FieldSelector<'a>>) -> FieldSelector<'a> {
    input.into()
}

// ============================================================================
// TESTS
// ============================================================================

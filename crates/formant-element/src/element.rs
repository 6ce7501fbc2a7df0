#![forbid(unsafe_code)]

//! The base element value object: name, attribute bag, options bag, value.
//!
//! `Element` is deliberately dumb storage. Behavior-carrying controls (the
//! multi-checkbox group, the file upload) wrap an `Element` and layer their
//! own semantics on top, intercepting the bag keys they claim.

use indexmap::IndexMap;

use crate::options::OptionsInput;

// ---------------------------------------------------------------------------
// AttrValue
// ---------------------------------------------------------------------------

/// A heterogeneous attribute or option value.
///
/// The `Options` variant exists because legacy callers push option lists
/// through the generic attribute-bag path (`set_attributes`) rather than the
/// dedicated setter; the bag must be able to carry that payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Options(OptionsInput),
}

impl AttrValue {
    /// The string value, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The option payload, if this is an `Options`.
    #[must_use]
    pub fn as_options(&self) -> Option<&OptionsInput> {
        match self {
            Self::Options(input) => Some(input),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<OptionsInput> for AttrValue {
    fn from(input: OptionsInput) -> Self {
        Self::Options(input)
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// An element's current value: a single scalar or a list of selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    Multi(Vec<String>),
}

impl Value {
    /// Whether the value holds (or is) the given string.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Single(s) => s == needle,
            Self::Multi(values) => values.iter().any(|v| v == needle),
        }
    }

    /// View the value as a list of selections. A scalar reads as a
    /// one-element list.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s.clone()],
            Self::Multi(values) => values.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Base form element: stable name, ordered attribute bag, ordered options
/// bag, and the currently submitted value.
///
/// Both bags preserve insertion order; rendering consumers observe it.
#[derive(Debug, Clone, Default)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, AttrValue>,
    options: IndexMap<String, AttrValue>,
    value: Option<Value>,
}

impl Element {
    /// Create an element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The element's name, used when building input specifications.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Read one attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Write one attribute, overwriting any prior value for the key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Write several attributes; equivalent to repeated `set_attribute`.
    pub fn set_attributes<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in attrs {
            self.set_attribute(key, value);
        }
    }

    /// The full attribute bag, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    /// Remove an attribute. A no-op if the key is absent.
    pub fn remove_attribute(&mut self, key: &str) {
        self.attributes.shift_remove(key);
    }

    /// Read one configuration option.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&AttrValue> {
        self.options.get(key)
    }

    /// Write one configuration option.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// The element's current value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Set the element's value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Clear the element's value.
    pub fn unset_value(&mut self) {
        self.value = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

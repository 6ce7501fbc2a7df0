#![forbid(unsafe_code)]

//! Option ingestion and normalization for choice-type controls.
//!
//! Option lists arrive in two legacy shapes: a flat value→label map, or a
//! list of full entry records. Both funnel through [`normalize_options`] into
//! one canonical ordered map keyed by option value, so every entry point
//! (the dedicated setter, the attribute-bag alias, the legacy options bag)
//! produces identical store contents.

use indexmap::IndexMap;

use crate::element::Value;

// ---------------------------------------------------------------------------
// OptionEntry
// ---------------------------------------------------------------------------

/// A fully normalized selectable option.
///
/// Within one store the `value` is unique; inserting a duplicate overwrites
/// the prior entry rather than duplicating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    /// Submitted form value; the membership key.
    pub value: String,
    /// Display label. Never participates in membership checks.
    pub label: String,
    /// Per-option rendering attributes.
    pub attributes: IndexMap<String, String>,
    /// Whether the option is currently selected.
    pub selected: bool,
}

// ---------------------------------------------------------------------------
// OptionSpec
// ---------------------------------------------------------------------------

/// A single entry as supplied by the caller, before defaulting.
///
/// Missing fields are filled in during normalization: the label defaults to
/// the stringified value, attributes to an empty bag, and `selected` to
/// whether the owning element's current value contains the option value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSpec {
    value: String,
    label: Option<String>,
    attributes: IndexMap<String, String>,
    selected: Option<bool>,
}

impl OptionSpec {
    /// Create an entry for the given value. Non-string values coerce to
    /// their string form.
    #[must_use]
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a rendering attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Force the selected flag instead of deriving it from element state.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// The option value this entry will be keyed by.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ---------------------------------------------------------------------------
// OptionsInput
// ---------------------------------------------------------------------------

/// The two accepted bulk-load shapes for option lists.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsInput {
    /// Flat `value => label` map.
    Flat(IndexMap<String, String>),
    /// Full entry records.
    Entries(Vec<OptionSpec>),
}

impl OptionsInput {
    /// Build the flat shape from `(value, label)` pairs. Values coerce to
    /// string keys.
    #[must_use]
    pub fn flat<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: Into<String>,
    {
        Self::Flat(
            pairs
                .into_iter()
                .map(|(value, label)| (value.to_string(), label.into()))
                .collect(),
        )
    }

    /// Build the entry-record shape.
    #[must_use]
    pub fn entries(entries: impl IntoIterator<Item = OptionSpec>) -> Self {
        Self::Entries(entries.into_iter().collect())
    }
}

impl From<Vec<OptionSpec>> for OptionsInput {
    fn from(entries: Vec<OptionSpec>) -> Self {
        Self::Entries(entries)
    }
}

impl<K: ToString, V: Into<String>, const N: usize> From<[(K, V); N]> for OptionsInput {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::flat(pairs)
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize either ingestion shape into the canonical ordered store map.
///
/// Defaulting rules:
/// - a missing label becomes the option value itself
/// - missing attributes become an empty bag
/// - a missing `selected` flag derives from whether `current_value` contains
///   the option value
///
/// Duplicate values within one input collapse last-write-wins, keeping the
/// position of the first occurrence.
#[must_use]
pub fn normalize_options(
    input: &OptionsInput,
    current_value: Option<&Value>,
) -> IndexMap<String, OptionEntry> {
    let is_selected = |value: &str, explicit: Option<bool>| {
        explicit.unwrap_or_else(|| current_value.is_some_and(|v| v.contains(value)))
    };

    let mut normalized = IndexMap::new();
    match input {
        OptionsInput::Flat(pairs) => {
            for (value, label) in pairs {
                normalized.insert(
                    value.clone(),
                    OptionEntry {
                        value: value.clone(),
                        label: label.clone(),
                        attributes: IndexMap::new(),
                        selected: is_selected(value, None),
                    },
                );
            }
        }
        OptionsInput::Entries(entries) => {
            for entry in entries {
                normalized.insert(
                    entry.value.clone(),
                    OptionEntry {
                        value: entry.value.clone(),
                        label: entry.label.clone().unwrap_or_else(|| entry.value.clone()),
                        attributes: entry.attributes.clone(),
                        selected: is_selected(&entry.value, entry.selected),
                    },
                );
            }
        }
    }
    normalized
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_shape_normalizes_to_entries() {
        let input = OptionsInput::flat([("1", "Option 1"), ("2", "Option 2")]);
        let store = normalize_options(&input, None);

        assert_eq!(store.len(), 2);
        let first = &store["1"];
        assert_eq!(first.value, "1");
        assert_eq!(first.label, "Option 1");
        assert!(first.attributes.is_empty());
        assert!(!first.selected);
    }

    #[test]
    fn entry_shape_defaults_label_to_value() {
        let input = OptionsInput::entries([OptionSpec::new("foo")]);
        let store = normalize_options(&input, None);
        assert_eq!(store["foo"].label, "foo");
    }

    #[test]
    fn entry_shape_keeps_explicit_fields() {
        let input = OptionsInput::entries([
            OptionSpec::new("foo")
                .label("My Foo Label")
                .attribute("class", "primary")
                .selected(true),
        ]);
        let store = normalize_options(&input, None);

        let entry = &store["foo"];
        assert_eq!(entry.label, "My Foo Label");
        assert_eq!(entry.attributes.get("class").map(String::as_str), Some("primary"));
        assert!(entry.selected);
    }

    #[test]
    fn selected_derives_from_current_value() {
        let value = Value::from(vec!["bar"]);
        let input = OptionsInput::entries([OptionSpec::new("foo"), OptionSpec::new("bar")]);
        let store = normalize_options(&input, Some(&value));

        assert!(!store["foo"].selected);
        assert!(store["bar"].selected);
    }

    #[test]
    fn explicit_selected_beats_derivation() {
        let value = Value::from(vec!["foo"]);
        let input = OptionsInput::entries([OptionSpec::new("foo").selected(false)]);
        let store = normalize_options(&input, Some(&value));
        assert!(!store["foo"].selected);
    }

    #[test]
    fn numeric_values_coerce_to_string_keys() {
        let input = OptionsInput::flat([(1, "One"), (2, "Two")]);
        let store = normalize_options(&input, None);
        assert!(store.contains_key("1"));
        assert!(store.contains_key("2"));

        let entry_input = OptionsInput::entries([OptionSpec::new(3)]);
        let store = normalize_options(&entry_input, None);
        assert_eq!(store["3"].label, "3");
    }

    #[test]
    fn duplicate_values_collapse_last_write_wins() {
        let input = OptionsInput::entries([
            OptionSpec::new("x").label("first"),
            OptionSpec::new("y").label("other"),
            OptionSpec::new("x").label("second"),
        ]);
        let store = normalize_options(&input, None);

        assert_eq!(store.len(), 2);
        assert_eq!(store["x"].label, "second");
        // First occurrence keeps its position.
        let keys: Vec<&str> = store.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn empty_input_yields_empty_store() {
        let store = normalize_options(&OptionsInput::entries([]), None);
        assert!(store.is_empty());
    }
}

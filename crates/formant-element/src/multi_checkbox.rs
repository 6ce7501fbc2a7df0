#![forbid(unsafe_code)]

//! The multi-checkbox group: an option store plus input-spec synthesis.
//!
//! The option store lives behind `Rc<RefCell<…>>` because synthesized
//! membership validators hold a live handle into it: a specification fetched
//! before options were loaded must still validate against the store's
//! *current* contents. The haystack is recomputed on every check, never
//! snapshotted.

use std::cell::RefCell;
use std::rc::Rc;

use formant_validate::{
    Explode, HaystackProvider, INPUT_TYPE_MULTI_CHECKBOX, InArray, InputSpec,
};
use indexmap::IndexMap;

use crate::InputProvider;
use crate::element::{AttrValue, Element, Value};
use crate::options::{OptionEntry, OptionSpec, OptionsInput, normalize_options};

// ---------------------------------------------------------------------------
// Shared store state
// ---------------------------------------------------------------------------

/// State shared between the element and any live validators built from it.
///
/// The hidden-element flag and the sentinel live here, not on the element,
/// so toggling them is visible to validators that were handed out earlier.
#[derive(Debug)]
struct StoreState {
    options: IndexMap<String, OptionEntry>,
    use_hidden_element: bool,
    unchecked_value: String,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            options: IndexMap::new(),
            use_hidden_element: false,
            unchecked_value: String::new(),
        }
    }
}

/// A [`HaystackProvider`] over a multi-checkbox option store.
///
/// Yields the store's current option values, in order, plus the unchecked
/// sentinel when the hidden-element pairing is enabled.
#[derive(Debug, Clone)]
pub struct OptionHaystack {
    store: Rc<RefCell<StoreState>>,
}

impl HaystackProvider for OptionHaystack {
    fn haystack(&self) -> Vec<String> {
        let state = self.store.borrow();
        let mut values: Vec<String> = state.options.keys().cloned().collect();
        if state.use_hidden_element && !values.iter().any(|v| *v == state.unchecked_value) {
            values.push(state.unchecked_value.clone());
        }
        values
    }
}

// ---------------------------------------------------------------------------
// MultiCheckbox
// ---------------------------------------------------------------------------

/// A group of checkboxes sharing one name, submitting a list of selections.
///
/// # Example
///
/// ```rust
/// use formant_element::{InputProvider, MultiCheckbox};
/// use formant_validate::Validator;
///
/// let mut element = MultiCheckbox::new("colors");
/// element.set_value_options([("red", "Red"), ("blue", "Blue")]);
///
/// let spec = element.input_specification();
/// let explode = &spec.validators.as_ref().unwrap()[0];
/// let picked = vec!["red".to_string()];
/// assert!(Validator::<[String]>::validate(explode, &picked).is_valid());
/// ```
#[derive(Debug)]
pub struct MultiCheckbox {
    element: Element,
    store: Rc<RefCell<StoreState>>,
    disable_in_array_validator: bool,
}

impl Default for MultiCheckbox {
    fn default() -> Self {
        Self::new("")
    }
}

impl MultiCheckbox {
    /// Create a multi-checkbox group with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut element = Element::new(name);
        element.set_attribute("type", "multi_checkbox");
        Self {
            element,
            store: Rc::new(RefCell::new(StoreState::default())),
            disable_in_array_validator: false,
        }
    }

    /// The element's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.element.name()
    }

    /// Rename the element.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.element.set_name(name);
    }

    /// The underlying base element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The element's current value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.element.value()
    }

    /// Set the element's value (the current selections).
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.element.set_value(value);
    }

    // -- option store ------------------------------------------------------

    /// Replace the entire option store. Accepts both ingestion shapes.
    pub fn set_value_options(&mut self, input: impl Into<OptionsInput>) {
        let input = input.into();
        let normalized = normalize_options(&input, self.element.value());
        #[cfg(feature = "tracing")]
        tracing::debug!(count = normalized.len(), "value options replaced");
        self.store.borrow_mut().options = normalized;
    }

    /// Insert or overwrite a single option by value and label.
    ///
    /// An existing value keeps its position in the store; a new value is
    /// appended at the end.
    pub fn add_value_option(&mut self, value: impl ToString, label: impl Into<String>) {
        self.add_option_entry(OptionSpec::new(value).label(label));
    }

    /// Insert or overwrite a single option from a full entry record.
    pub fn add_option_entry(&mut self, entry: OptionSpec) {
        let normalized =
            normalize_options(&OptionsInput::entries([entry]), self.element.value());
        let mut state = self.store.borrow_mut();
        for (value, entry) in normalized {
            state.options.insert(value, entry);
        }
    }

    /// Remove an option by value. A no-op if the value is absent.
    pub fn unset_value_option(&mut self, value: &str) {
        self.store.borrow_mut().options.shift_remove(value);
    }

    /// Flat `value => label` view of the store, in insertion order.
    #[must_use]
    pub fn value_options(&self) -> IndexMap<String, String> {
        self.store
            .borrow()
            .options
            .values()
            .map(|entry| (entry.value.clone(), entry.label.clone()))
            .collect()
    }

    /// Full-entry view of the store, in insertion order.
    #[must_use]
    pub fn option_entries(&self) -> Vec<OptionEntry> {
        self.store.borrow().options.values().cloned().collect()
    }

    /// A live haystack provider over this element's option store, for
    /// callers building their own validators.
    #[must_use]
    pub fn option_haystack(&self) -> OptionHaystack {
        OptionHaystack {
            store: Rc::clone(&self.store),
        }
    }

    // -- flags -------------------------------------------------------------

    /// Omit the in-array validator from synthesized specifications.
    pub fn set_disable_in_array_validator(&mut self, disable: bool) {
        self.disable_in_array_validator = disable;
    }

    /// Whether the in-array validator is omitted.
    #[must_use]
    pub fn is_in_array_validator_disabled(&self) -> bool {
        self.disable_in_array_validator
    }

    /// Pair the group with a hidden element that submits the unchecked
    /// sentinel when nothing is selected; the sentinel then passes
    /// validation.
    pub fn set_use_hidden_element(&mut self, use_hidden: bool) {
        self.store.borrow_mut().use_hidden_element = use_hidden;
    }

    /// Whether the hidden-element pairing is enabled.
    #[must_use]
    pub fn use_hidden_element(&self) -> bool {
        self.store.borrow().use_hidden_element
    }

    /// Set the sentinel value the paired hidden element submits.
    pub fn set_unchecked_value(&mut self, value: impl Into<String>) {
        self.store.borrow_mut().unchecked_value = value.into();
    }

    /// The current unchecked sentinel (default `""`).
    #[must_use]
    pub fn unchecked_value(&self) -> String {
        self.store.borrow().unchecked_value.clone()
    }

    // -- attribute / options bags -----------------------------------------

    /// Read an attribute. The `"options"` key proxies the option store.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<AttrValue> {
        if key == "options" {
            return Some(AttrValue::Options(OptionsInput::Flat(self.value_options())));
        }
        self.element.attribute(key).cloned()
    }

    /// Write an attribute. An option payload under the `"options"` key
    /// populates the canonical store instead of the bag.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        match value.into() {
            AttrValue::Options(input) if key == "options" => self.set_value_options(input),
            value => self.element.set_attribute(key, value),
        }
    }

    /// Write several attributes; equivalent to repeated [`set_attribute`].
    ///
    /// [`set_attribute`]: MultiCheckbox::set_attribute
    pub fn set_attributes<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in attrs {
            self.set_attribute(key, value);
        }
    }

    /// Write configuration options. The `"value_options"` and `"options"`
    /// keys both feed the canonical store (last key processed wins there);
    /// every key's raw payload is retained in the options bag so it reads
    /// back unchanged via [`option`].
    ///
    /// [`option`]: MultiCheckbox::option
    pub fn set_options<K, V>(&mut self, opts: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in opts {
            let key = key.into();
            let value = value.into();
            if matches!(key.as_str(), "value_options" | "options")
                && let AttrValue::Options(input) = &value
            {
                self.set_value_options(input.clone());
            }
            self.element.set_option(key, value);
        }
    }

    /// Read back one configuration option as written.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&AttrValue> {
        self.element.option(key)
    }
}

impl InputProvider for MultiCheckbox {
    /// Build a fresh specification from current element state.
    ///
    /// When validation is enabled, the embedded membership validator holds a
    /// live handle into the option store: options added after this call are
    /// accepted without re-fetching the specification.
    fn input_specification(&self) -> InputSpec {
        if self.disable_in_array_validator {
            #[cfg(feature = "tracing")]
            tracing::debug!(element = self.element.name(), "in-array validator disabled");
            return InputSpec::without_validators(INPUT_TYPE_MULTI_CHECKBOX, self.element.name());
        }

        let validator = Explode::new(InArray::new(Rc::new(self.option_haystack())));
        InputSpec::with_validators(
            INPUT_TYPE_MULTI_CHECKBOX,
            self.element.name(),
            vec![validator],
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

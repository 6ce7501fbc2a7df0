#![forbid(unsafe_code)]

//! Core validation types and the membership validators used by form elements.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

// ---------------------------------------------------------------------------
// Error Codes
// ---------------------------------------------------------------------------

/// Error code emitted when a value is not part of the allowed haystack.
pub const ERROR_CODE_NOT_IN_HAYSTACK: &str = "not_in_haystack";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A validation error with a stable code, a message template, and
/// interpolation parameters.
///
/// The `code` field is a fixed identifier consumed programmatically by
/// input-filter factories; every code this crate emits is exported as a
/// constant, so a downstream factory never sees an unrecognized code
/// originating here.
///
/// # Example
///
/// ```rust
/// use formant_validate::ValidationError;
///
/// let error = ValidationError::new("not_in_haystack", "'{value}' is not allowed")
///     .with_param("value", "4");
///
/// assert_eq!(error.format_message(), "'4' is not allowed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message template.
    pub message: String,
    /// Parameters substituted into the message via `{key}` placeholders.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Create a new validation error with the given code and message.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter for message interpolation.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Format the message, replacing `{key}` placeholders with parameters.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Returns the formatted error message if invalid, otherwise `None`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ValidationError::format_message)
    }

    /// Combine two results, keeping the first error if any.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::Valid => other,
            Self::Invalid(_) => self,
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A trait for validating values of type `T`.
///
/// Validators are value objects owned by a single element instance; formant
/// assumes single-threaded, single-request ownership, so implementations may
/// hold `Rc` handles into element state and the trait carries no thread
/// bounds.
pub trait Validator<T: ?Sized> {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// Return the default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// HaystackProvider
// ---------------------------------------------------------------------------

/// Source of the allowed value set consulted by [`InArray`].
///
/// The provider is queried on *every* membership check and on every call to
/// [`InArray::haystack`]. A provider backed by mutable element state (for
/// example the option store of a checkbox group) therefore makes the
/// validator track that state: options added after the validator was built
/// are accepted without rebuilding it.
pub trait HaystackProvider {
    /// Return the current allowed values.
    fn haystack(&self) -> Vec<String>;
}

/// A fixed haystack.
impl HaystackProvider for Vec<String> {
    fn haystack(&self) -> Vec<String> {
        self.clone()
    }
}

// ---------------------------------------------------------------------------
// InArray
// ---------------------------------------------------------------------------

/// Validates that a value is a member of an allowed set.
///
/// The set is not copied at construction time; it is re-read from the
/// [`HaystackProvider`] each time the validator is consulted.
///
/// # Example
///
/// ```rust
/// use formant_validate::{InArray, Validator};
///
/// let v = InArray::of(["1", "2", "3"]);
/// assert!(v.validate("2").is_valid());
/// assert!(v.validate("4").is_invalid());
/// ```
#[derive(Clone)]
pub struct InArray {
    provider: Rc<dyn HaystackProvider>,
}

impl InArray {
    /// Create a membership validator backed by a live haystack provider.
    #[must_use]
    pub fn new(provider: Rc<dyn HaystackProvider>) -> Self {
        Self { provider }
    }

    /// Create a membership validator over a fixed list of allowed values.
    #[must_use]
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(Rc::new(values))
    }

    /// Return the current allowed set, re-read from the provider.
    #[must_use]
    pub fn haystack(&self) -> Vec<String> {
        self.provider.haystack()
    }
}

impl Validator<str> for InArray {
    fn validate(&self, value: &str) -> ValidationResult {
        if self.provider.haystack().iter().any(|allowed| allowed == value) {
            ValidationResult::Valid
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(value, "value not found in haystack");
            ValidationResult::Invalid(
                ValidationError::new(
                    ERROR_CODE_NOT_IN_HAYSTACK,
                    "'{value}' is not in the list of allowed values",
                )
                .with_param("value", value),
            )
        }
    }

    fn error_message(&self) -> &str {
        "The value is not in the list of allowed values"
    }
}

impl fmt::Debug for InArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InArray")
            .field("haystack", &self.provider.haystack())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Explode
// ---------------------------------------------------------------------------

/// Applies an inner validator to every element of a submitted list.
///
/// Form controls that allow multiple selections submit a list of values, not
/// a scalar; `Explode` validates each element in turn and reports the first
/// failure. A scalar input is first split on [`value_delimiter`].
///
/// [`value_delimiter`]: Explode::with_delimiter
#[derive(Debug, Clone)]
pub struct Explode<V> {
    inner: V,
    value_delimiter: String,
}

impl<V> Explode<V> {
    /// Wrap an inner validator, splitting scalar input on `","`.
    #[must_use]
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            value_delimiter: ",".to_string(),
        }
    }

    /// Set the delimiter used to split scalar input.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.value_delimiter = delimiter.into();
        self
    }

    /// Access the wrapped validator.
    pub fn validator(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator<str>> Validator<[String]> for Explode<V> {
    fn validate(&self, values: &[String]) -> ValidationResult {
        for value in values {
            let result = self.inner.validate(value);
            if result.is_invalid() {
                return result;
            }
        }
        ValidationResult::Valid
    }

    fn error_message(&self) -> &str {
        self.inner.error_message()
    }
}

impl<V: Validator<str>> Validator<str> for Explode<V> {
    fn validate(&self, value: &str) -> ValidationResult {
        for part in value.split(self.value_delimiter.as_str()) {
            let result = self.inner.validate(part);
            if result.is_invalid() {
                return result;
            }
        }
        ValidationResult::Valid
    }

    fn error_message(&self) -> &str {
        self.inner.error_message()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // -- ValidationError tests --

    #[test]
    fn validation_error_format_message() {
        let err = ValidationError::new("test", "'{value}' rejected").with_param("value", "x");
        assert_eq!(err.format_message(), "'x' rejected");
    }

    #[test]
    fn validation_error_display_uses_params() {
        let err = ValidationError::new("test", "between {min} and {max}")
            .with_param("min", 1)
            .with_param("max", 9);
        assert_eq!(format!("{err}"), "between 1 and 9");
    }

    // -- ValidationResult tests --

    #[test]
    fn validation_result_accessors() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(ValidationResult::Valid.error().is_none());

        let invalid = ValidationResult::Invalid(ValidationError::new("code", "msg"));
        assert!(invalid.is_invalid());
        assert_eq!(invalid.error().map(|e| e.code), Some("code"));
    }

    #[test]
    fn validation_result_and_keeps_first_error() {
        let a = ValidationResult::Invalid(ValidationError::new("first", ""));
        let b = ValidationResult::Invalid(ValidationError::new("second", ""));
        assert_eq!(a.clone().and(b).error().map(|e| e.code), Some("first"));
        assert!(ValidationResult::Valid.and(ValidationResult::Valid).is_valid());
    }

    // -- InArray tests --

    #[test]
    fn in_array_fixed_haystack() {
        let v = InArray::of(["foo", "bar"]);
        assert!(v.validate("foo").is_valid());
        assert!(v.validate("bar").is_valid());
        assert!(v.validate("baz").is_invalid());
    }

    #[test]
    fn in_array_empty_haystack_rejects_everything() {
        let v = InArray::of(Vec::<String>::new());
        assert!(v.validate("").is_invalid());
        assert!(v.validate("anything").is_invalid());
    }

    #[test]
    fn in_array_error_code_and_param() {
        let v = InArray::of(["a"]);
        let result = v.validate("b");
        let err = result.error().expect("expected an error");
        assert_eq!(err.code, ERROR_CODE_NOT_IN_HAYSTACK);
        assert_eq!(err.params.get("value"), Some(&"b".to_string()));
    }

    #[test]
    fn in_array_haystack_accessor() {
        let v = InArray::of(["x", "y"]);
        assert_eq!(v.haystack(), vec!["x".to_string(), "y".to_string()]);
    }

    // A provider over shared mutable state: the validator must observe
    // values added after construction.
    struct SharedHaystack(Rc<RefCell<Vec<String>>>);

    impl HaystackProvider for SharedHaystack {
        fn haystack(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn in_array_rereads_live_provider() {
        let shared = Rc::new(RefCell::new(vec!["a".to_string(), "b".to_string()]));
        let v = InArray::new(Rc::new(SharedHaystack(Rc::clone(&shared))));

        assert!(v.validate("c").is_invalid());
        shared.borrow_mut().push("c".to_string());
        assert!(v.validate("c").is_valid());
        assert_eq!(v.haystack().len(), 3);
    }

    // -- Explode tests --

    #[test]
    fn explode_validates_each_list_element() {
        let v = Explode::new(InArray::of(["1", "2", "3"]));
        let ok = vec!["1".to_string(), "3".to_string()];
        let bad = vec!["1".to_string(), "4".to_string()];
        assert!(Validator::<[String]>::validate(&v, &ok).is_valid());
        assert!(Validator::<[String]>::validate(&v, &bad).is_invalid());
    }

    #[test]
    fn explode_empty_list_is_valid() {
        let v = Explode::new(InArray::of(["1"]));
        assert!(Validator::<[String]>::validate(&v, &[]).is_valid());
    }

    #[test]
    fn explode_reports_first_failure() {
        let v = Explode::new(InArray::of(["a"]));
        let values = vec!["x".to_string(), "y".to_string()];
        let result = Validator::<[String]>::validate(&v, &values);
        let err = result.error().expect("expected an error");
        assert_eq!(err.params.get("value"), Some(&"x".to_string()));
    }

    #[test]
    fn explode_splits_scalar_on_delimiter() {
        let v = Explode::new(InArray::of(["red", "green"]));
        assert!(Validator::<str>::validate(&v, "red,green").is_valid());
        assert!(Validator::<str>::validate(&v, "red,blue").is_invalid());
    }

    #[test]
    fn explode_custom_delimiter() {
        let v = Explode::new(InArray::of(["red", "green"])).with_delimiter(";");
        assert!(Validator::<str>::validate(&v, "red;green").is_valid());
        assert!(Validator::<str>::validate(&v, "red,green").is_invalid());
    }

    #[test]
    fn explode_exposes_inner_validator() {
        let v = Explode::new(InArray::of(["only"]));
        assert_eq!(v.validator().haystack(), vec!["only".to_string()]);
    }
}

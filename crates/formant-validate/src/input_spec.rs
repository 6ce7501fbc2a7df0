#![forbid(unsafe_code)]

//! The input-specification contract consumed by input-filter factories.

use crate::validators::{Explode, InArray};

/// Input type for the multi-checkbox element family.
pub const INPUT_TYPE_MULTI_CHECKBOX: &str = "multi-checkbox";

/// Input type for the file-upload element.
pub const INPUT_TYPE_FILE: &str = "file-input";

/// A declarative description of how one element's submitted value should be
/// filtered and validated.
///
/// Specifications are ephemeral: an element builds a fresh one on every
/// request. The embedded validators are live objects, however — their
/// haystacks are re-read from element state when consulted — so a
/// specification fetched early still validates against the element's current
/// options.
///
/// `validators: None` means the element asserts no validation at all. This is
/// distinct from `Some(vec![])`: consumers must check for presence of the
/// field, not emptiness.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// Logical input type; always one of the `INPUT_TYPE_*` constants.
    pub input_type: &'static str,
    /// Element name the input is registered under.
    pub name: String,
    /// Whether the input must be present in the submission.
    pub required: bool,
    /// Validators to apply, in order. Absent when validation is disabled.
    pub validators: Option<Vec<Explode<InArray>>>,
}

impl InputSpec {
    /// A specification carrying no validators at all.
    #[must_use]
    pub fn without_validators(input_type: &'static str, name: impl Into<String>) -> Self {
        Self {
            input_type,
            name: name.into(),
            required: false,
            validators: None,
        }
    }

    /// A specification with the given validator chain.
    #[must_use]
    pub fn with_validators(
        input_type: &'static str,
        name: impl Into<String>,
        validators: Vec<Explode<InArray>>,
    ) -> Self {
        Self {
            input_type,
            name: name.into(),
            required: false,
            validators: Some(validators),
        }
    }

    /// Whether the `validators` field is present (even if empty).
    #[must_use]
    pub fn has_validators(&self) -> bool {
        self.validators.is_some()
    }
}

#![forbid(unsafe_code)]

//! The file-upload element.

use formant_validate::{INPUT_TYPE_FILE, InputSpec};

use crate::element::Element;
use crate::{InputProvider, PrepareElement};

/// A file-upload control.
///
/// Its specification is fixed: a `file-input` with no validators, never
/// required. On preparation it forces the owning form onto the multipart
/// encoding so uploads survive submission.
#[derive(Debug)]
pub struct File {
    element: Element,
}

impl Default for File {
    fn default() -> Self {
        Self::new("")
    }
}

impl File {
    /// Create a file-upload element with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut element = Element::new(name);
        element.set_attribute("type", "file");
        Self { element }
    }

    /// The element's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.element.name()
    }

    /// The underlying base element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl InputProvider for File {
    fn input_specification(&self) -> InputSpec {
        InputSpec::without_validators(INPUT_TYPE_FILE, self.element.name())
    }
}

impl PrepareElement for File {
    fn prepare_element(&self, form: &mut Element) {
        form.set_attribute("enctype", "multipart/form-data");
    }
}

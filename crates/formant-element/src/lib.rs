#![forbid(unsafe_code)]

//! Form element value objects and input-specification synthesis.
//!
//! Elements are plain value objects representing server-side HTML form
//! controls. Choice-type controls own an option store (the set of selectable
//! value/label pairs) and can synthesize, on demand, a declarative
//! [`InputSpec`] describing how their submitted value should be validated.
//!
//! The synthesized specification is fresh on every call, but the membership
//! validator embedded in it is live: it re-reads the element's option store
//! whenever it is consulted, so options added after the specification was
//! fetched still validate.
//!
//! # Example
//!
//! ```rust
//! use formant_element::{InputProvider, MultiCheckbox};
//! use formant_validate::Validator;
//!
//! let mut element = MultiCheckbox::new("toppings");
//! element.set_value_options([("1", "Cheese"), ("2", "Mushrooms")]);
//!
//! let spec = element.input_specification();
//! let validator = &spec.validators.as_ref().unwrap()[0];
//! let submitted = vec!["2".to_string()];
//! assert!(Validator::<[String]>::validate(validator, &submitted).is_valid());
//! ```

use formant_validate::InputSpec;

mod element;
mod file;
mod multi_checkbox;
mod options;

pub use element::{AttrValue, Element, Value};
pub use file::File;
pub use multi_checkbox::{MultiCheckbox, OptionHaystack};
pub use options::{OptionEntry, OptionSpec, OptionsInput, normalize_options};

/// Elements that can describe how their submitted value is validated.
///
/// The returned specification is a fresh value object each call; callers
/// must not assume mutations made after a fetch are reflected in the record
/// itself (embedded validators, however, are live).
pub trait InputProvider {
    /// Build an input specification from current element state.
    fn input_specification(&self) -> InputSpec;
}

/// Elements that adjust the owning form when it is prepared for submission.
pub trait PrepareElement {
    /// Prepare the owning form (for example, force its encoding attribute).
    fn prepare_element(&self, form: &mut Element);
}

#![forbid(unsafe_code)]

//! formant public facade crate.
//!
//! Re-exports the element and validation surfaces under one roof and offers
//! a lightweight prelude for day-to-day usage.

// --- Element re-exports ----------------------------------------------------

pub use formant_element::{
    AttrValue, Element, File, InputProvider, MultiCheckbox, OptionEntry, OptionHaystack,
    OptionSpec, OptionsInput, PrepareElement, Value, normalize_options,
};

// --- Validation re-exports -------------------------------------------------

pub use formant_validate::{
    ERROR_CODE_NOT_IN_HAYSTACK, Explode, HaystackProvider, INPUT_TYPE_FILE,
    INPUT_TYPE_MULTI_CHECKBOX, InArray, InputSpec, ValidationError, ValidationResult, Validator,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AttrValue, Element, File, InputProvider, InputSpec, MultiCheckbox, OptionSpec,
        OptionsInput, PrepareElement, ValidationResult, Validator, Value,
    };
}

#![forbid(unsafe_code)]

//! Input validation for server-side form elements.
//!
//! This crate provides the validation half of formant:
//! - A core [`Validator`] trait for validating submitted values
//! - The [`InArray`] membership validator, whose allowed set (haystack) is
//!   read through a [`HaystackProvider`] on every check, so validators built
//!   against mutable element state stay in sync with it
//! - The [`Explode`] wrapper, which applies an inner validator to every
//!   element of a submitted list (or to every delimited segment of a scalar)
//! - The [`InputSpec`] record consumed by input-filter factories
//!
//! # Example
//!
//! ```rust
//! use formant_validate::{InArray, Validator};
//!
//! let validator = InArray::of(["red", "green", "blue"]);
//! assert!(validator.validate("green").is_valid());
//! assert!(!validator.validate("mauve").is_valid());
//! ```

mod input_spec;
mod validators;

pub use input_spec::{INPUT_TYPE_FILE, INPUT_TYPE_MULTI_CHECKBOX, InputSpec};
pub use validators::{
    // Error codes
    ERROR_CODE_NOT_IN_HAYSTACK,
    // Validators
    Explode,
    HaystackProvider,
    InArray,
    // Core types
    ValidationError,
    ValidationResult,
    Validator,
};

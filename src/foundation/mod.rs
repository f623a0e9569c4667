//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Architecture
//!
//! Validators are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! use form_validator::foundation::Validate;
//!
//! struct MinLength { min: usize }
//!
//! impl Validate for MinLength {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Validators compose using logical combinators:
//!
//! ```rust,ignore
//! let validator = min_length(5).and(alphabetic());
//! ```
//!
//! Errors are structured and carry a display-ready message:
//!
//! ```rust,ignore
//! let error = ValidationError::new("min_length", "Too short")
//!     .with_field("username")
//!     .with_param("min", "5");
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// All validators must pass for this to succeed. Unlike `and`, this does
/// not short-circuit: each failing validator contributes its own error,
/// which is what a form wants when reporting all problems at once.
///
/// # Examples
///
/// ```rust,ignore
/// use form_validator::foundation::validate_with_all;
///
/// let result = validate_with_all("hello", &[
///     &min_length(3),
///     &alphabetic(),
/// ])?;
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    if errors.has_errors() { Err(errors) } else { Ok(()) }
}

/// Validates a value with multiple validators (at least one must pass).
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// TESTS
// ============================================================================

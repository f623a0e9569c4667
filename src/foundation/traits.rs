//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API: `Ok(())` is the
/// single distinguished success tag, everything else carries a
/// display-ready failure message.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use form_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::new(
///                 "min_length",
///                 format!("Must be at least {} characters", self.min),
///             ))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`, providing a fluent API for composing validators.
///
/// # Examples
///
/// ```rust,ignore
/// use form_validator::prelude::*;
///
/// let validator = min_length(5).and(alphabetic());
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass for the combined validator to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass for the combined validator to
    /// succeed. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    ///
    /// The combined validator succeeds if the original validator fails,
    /// and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes a validator optional.
    ///
    /// The resulting validator accepts `Option<Input>` and passes
    /// vacuously on `None`.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Replaces the failure message of this validator.
    ///
    /// The original error is preserved as a nested error.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

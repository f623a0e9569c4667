//! Message override combinator
//!
//! Replaces the display message of a failing validator while preserving
//! the original error as a nested error. Form rules use this to swap a
//! generic validator failure for the exact wording the UI expects.

use crate::foundation::{Validate, ValidationError};

/// Overrides the failure message of a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithMessage<V> {
    pub(crate) inner: V,
    pub(crate) message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new message override.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns the override message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), self.message.clone())
                .with_nested_error(original)
        })
    }
}

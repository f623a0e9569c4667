//! OR combinator - logical disjunction of validators
//!
//! At least one validator must pass for the combined validator to succeed.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// Short-circuits on the first success. If both fail, the resulting error
/// carries both underlying errors as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_err) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_err) => Err(ValidationError::new(
                    "or_failed",
                    "All alternatives failed validation",
                )
                .with_nested(vec![left_err, right_err])),
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

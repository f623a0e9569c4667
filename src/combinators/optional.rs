//! Optional combinator - vacuous success on `None`

use crate::foundation::{Validate, ValidationError};

/// Wraps a validator so it accepts `Option<Input>`.
///
/// `None` passes vacuously; `Some(value)` is validated with the inner
/// validator. This mirrors form fields that only validate once the user
/// has entered something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V, T> Validate for Optional<V>
where
    V: Validate<Input = T>,
    T: Sized,
{
    type Input = Option<T>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input {
            None => Ok(()),
            Some(value) => self.inner.validate(value),
        }
    }
}

/// Creates an `Optional` combinator from a validator.
pub fn optional<V: Validate>(inner: V) -> Optional<V> {
    Optional::new(inner)
}

//! Each combinator - element-wise validation of slices
//!
//! Applies a single element validator to every element of a slice. Used by
//! form rules that accept either a scalar or an array of scalars and must
//! validate each entry.

use crate::foundation::{Validate, ValidationError};

/// Validates every element of a slice with the same validator.
///
/// By default, stops at the first failing element and reports its index.
/// With [`collect_all`](Each::collect_all), all failing elements are
/// reported as nested errors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Each<V> {
    pub(crate) element: V,
    pub(crate) fail_fast: bool,
}

impl<V> Each<V> {
    /// Creates a new `Each` combinator that stops at the first failure.
    pub fn new(element: V) -> Self {
        Self {
            element,
            fail_fast: true,
        }
    }

    /// Reports every failing element instead of stopping at the first.
    #[must_use]
    pub fn collect_all(mut self) -> Self {
        self.fail_fast = false;
        self
    }

    /// Returns a reference to the element validator.
    pub fn element(&self) -> &V {
        &self.element
    }
}

impl<V, T> Validate for Each<V>
where
    V: Validate<Input = T>,
    T: Sized,
{
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.fail_fast {
            for (index, item) in input.iter().enumerate() {
                self.element
                    .validate(item)
                    .map_err(|e| e.with_param("index", index.to_string()))?;
            }
            return Ok(());
        }

        let failures: Vec<ValidationError> = input
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.element
                    .validate(item)
                    .err()
                    .map(|e| e.with_param("index", index.to_string()))
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(
                ValidationError::new("each_failed", "One or more elements failed validation")
                    .with_param("failed_count", failures.len().to_string())
                    .with_nested(failures),
            )
        }
    }
}

/// Creates an `Each` combinator from an element validator.
pub fn each<V: Validate>(element: V) -> Each<V> {
    Each::new(element)
}

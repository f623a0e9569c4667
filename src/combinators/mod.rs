//! Validator combinators
//!
//! Combinators compose small validators into larger ones:
//!
//! - [`And`] - both must pass (short-circuits on first failure)
//! - [`Or`] - at least one must pass (nests both errors on failure)
//! - [`Not`] - inverts a validator
//! - [`Each`] - applies an element validator across a slice
//! - [`Optional`] - vacuous pass on `None`
//! - [`WithMessage`] - replaces the failure message
//!
//! Most of the time these are built through [`ValidateExt`] methods
//! rather than constructed directly:
//!
//! ```rust,ignore
//! use form_validator::prelude::*;
//!
//! let validator = min_length(3)
//!     .and(alphabetic())
//!     .with_message("Letters only, at least 3 of them");
//! ```
//!
//! [`ValidateExt`]: crate::foundation::ValidateExt

pub mod and;
pub mod each;
pub mod message;
pub mod not;
pub mod optional;
pub mod or;

pub use and::{And, and};
pub use each::{Each, each};
pub use message::WithMessage;
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};

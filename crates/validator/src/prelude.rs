//! Prelude module for convenient imports.
//!
//! ```rust
//! use formgate_validator::prelude::*;
//!
//! let mut session = ValidationSession::new([("name", "Ada")]);
//! session.required("name", "%s is required").is_alpha("name", "letters only");
//! assert!(session.is_valid());
//! ```

pub use crate::foundation::{
    ConfigError, ExitPolicy, FailureKind, FieldMap, FieldSelector, LengthMode, ValidationFailure,
    ValidatorConfig, normalize_selector,
};
pub use crate::rules::{Callback, IntoParams, Pattern, PredicateRegistry, PredicateResolver};
pub use crate::session::{HaltHandler, Outcome, ValidationSession};

//! Building blocks shared by the session and the rule families
//!
//! - **Fields**: [`FieldMap`], [`FieldSelector`], [`normalize_selector`]
//! - **Messages**: [`format_message`] for placeholder substitution
//! - **Errors**: [`ValidationFailure`], [`FailureKind`], [`ConfigError`]
//! - **Configuration**: [`ValidatorConfig`], [`ExitPolicy`], [`LengthMode`]

pub mod config;
pub mod error;
pub mod fields;
pub mod message;

pub use config::{ExitPolicy, LengthMode, ValidatorConfig};
pub use error::{ConfigError, FailureKind, ValidationFailure};
pub use fields::{FieldMap, FieldSelector, FieldValue, normalize_selector};
pub use message::{DEFAULT_PLACEHOLDER, format_message};

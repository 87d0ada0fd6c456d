//! # formgate-validator
//!
//! A short-circuiting field validation engine for flat form input.
//!
//! A [`ValidationSession`] takes a `field name -> value` map and runs an
//! ordered chain of rules against it. The first failing rule latches the
//! session invalid and records its message; every later rule is skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate_validator::prelude::*;
//!
//! let mut session = ValidationSession::new([
//!     ("email", "a@b.com"),
//!     ("age", "17"),
//!     ("confirm", "a@b.com"),
//! ]);
//!
//! session
//!     .required(["email", "age"], "%s is required")
//!     .is_email("email", "%s is not an email address")
//!     .numeric_greater_than("age", 18, "too young")
//!     .fields_equal("confirm", "email", "emails differ");
//!
//! assert!(!session.is_valid());
//! assert_eq!(session.error_message(), "too young");
//! ```
//!
//! ## Rule families
//!
//! - **Presence**: `required`, `required_if_present`
//! - **Format**: `matches_pattern` and the built-in formats (email, URL,
//!   letters, digits, ...)
//! - **Bounds**: `min_length`, `max_length`, `numeric_greater_than`,
//!   `numeric_less_than`
//! - **Dates**: `is_date_dmy`, `is_date_ymd`, `is_date_time`,
//!   `date_greater_than`, `date_less_than`
//! - **Relations**: `must_equal_value`, `must_be_selected`, `fields_equal`
//! - **Extension**: `callback` with functions, host methods or a
//!   [`PredicateRegistry`](rules::PredicateRegistry)
//!
//! Messages may contain one `%s` placeholder, replaced with the name of the
//! failing field.

pub mod foundation;
pub mod prelude;
pub mod rules;
mod session;

pub use session::{HaltHandler, Outcome, ValidationSession};

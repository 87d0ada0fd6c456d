//! Error types for validation failures
//!
//! Rule violations never cross the session boundary as `Err` values; the
//! session records a single [`ValidationFailure`] and exposes it through its
//! flag-and-message pair. `ValidationFailure` still implements
//! [`std::error::Error`] so callers can lift it into their own error types
//! with `?` after [`finish`](crate::ValidationSession::finish).

use std::fmt;

use serde::Serialize;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// Where a recorded failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A built-in rule condition failed, including malformed dates.
    Rule,
    /// A named callback predicate could not be resolved.
    UnresolvedCallback,
    /// The caller invalidated the session directly.
    Manual,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rule => "rule",
            Self::UnresolvedCallback => "unresolved_callback",
            Self::Manual => "manual",
        })
    }
}

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// The first failure recorded by a session.
///
/// `message` is final: placeholders have already been substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    /// Failure category.
    pub kind: FailureKind,
    /// Name of the rule that latched the session, e.g. `"required"`.
    pub rule: &'static str,
    /// Field that failed, when the rule targets a field.
    pub field: Option<String>,
    /// Formatted message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a rule violation.
    pub fn rule(rule: &'static str, field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Rule,
            rule,
            field: field.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Creates a callback resolution failure for `name`.
    #[must_use]
    pub fn unresolved_callback(name: &str) -> Self {
        Self {
            kind: FailureKind::UnresolvedCallback,
            rule: "callback",
            field: None,
            message: format!("Method `{name}()` not exists."),
        }
    }

    /// Creates a manual failure raised by the caller.
    pub fn manual(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Manual,
            rule: "set_invalid",
            field: None,
            message: message.into(),
        }
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while building a [`ValidatorConfig`](crate::foundation::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid validator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The placeholder token contains whitespace.
    #[error("placeholder {0:?} must not contain whitespace")]
    InvalidPlaceholder(String),
}

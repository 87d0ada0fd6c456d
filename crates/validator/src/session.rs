//! Validation session: the short-circuit latch every rule runs against
//!
//! A [`ValidationSession`] owns the field map for one validation attempt and
//! records at most one failure. Rules are methods on the session (see
//! [`crate::rules`]); each returns `&mut Self` so calls can be chained:
//!
//! ```
//! use formgate_validator::prelude::*;
//!
//! let mut session = ValidationSession::new([("email", " a@b.com "), ("age", "17")]);
//! session
//!     .required(["email", "age"], "%s is required")
//!     .is_email("email", "Invalid email")
//!     .numeric_greater_than("age", 18, "too young");
//!
//! assert!(!session.is_valid());
//! assert_eq!(session.error_message(), "too young");
//! assert_eq!(session.fields().get("email"), Some("a@b.com"));
//! ```
//!
//! Once a rule fails the session is invalid for good: later rules return
//! immediately, without reading or rewriting any field.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::foundation::{
    ExitPolicy, FieldMap, FieldSelector, FieldValue, ValidationFailure, ValidatorConfig,
    format_message,
};
use crate::rules::callback::PredicateResolver;

// ============================================================================
// HALT HANDLER
// ============================================================================

/// Receives the first failure of a session configured with [`ExitPolicy::Halt`].
///
/// Hosts use it to abort their own request, e.g. by writing an error response.
/// It is called at most once per session.
pub trait HaltHandler {
    /// Called with the failure that latched the session.
    fn halt(&mut self, failure: &ValidationFailure);
}

impl<F> HaltHandler for F
where
    F: FnMut(&ValidationFailure),
{
    fn halt(&mut self, failure: &ValidationFailure) {
        self(failure);
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Serializable `{ valid, error }` pair for Ajax-style responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether every rule passed.
    pub valid: bool,
    /// First failure message, empty when valid.
    pub error: String,
}

// ============================================================================
// VALIDATION SESSION
// ============================================================================

/// Mutable state of one validation run.
pub struct ValidationSession {
    fields: FieldMap,
    config: ValidatorConfig,
    failure: Option<ValidationFailure>,
    host: Option<Arc<dyn PredicateResolver>>,
    halt: Option<Box<dyn HaltHandler>>,
}

impl ValidationSession {
    /// Creates a valid session over `fields` with the default configuration.
    #[must_use]
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self::from_fields(fields.into_iter().collect())
    }

    /// Creates a valid session over an existing [`FieldMap`].
    #[must_use]
    pub fn from_fields(fields: FieldMap) -> Self {
        Self {
            fields,
            config: ValidatorConfig::default(),
            failure: None,
            host: None,
            halt: None,
        }
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Injects the host object that named callbacks are resolved against.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_host(mut self, host: Arc<dyn PredicateResolver>) -> Self {
        self.host = Some(host);
        self
    }

    /// Installs the handler called on first failure under [`ExitPolicy::Halt`].
    #[must_use = "builder methods must be chained or built"]
    pub fn on_halt(mut self, handler: impl HaltHandler + 'static) -> Self {
        self.halt = Some(Box::new(handler));
        self
    }

    /// Replaces the field map. Meant for one-time setup before any rule runs.
    pub fn with_fields<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields = fields.into_iter().collect();
        self
    }

    // ------------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------------

    /// Returns `true` until a rule fails.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Message of the first failure, or `""` if the session is still valid.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.failure.as_ref().map_or("", |f| f.message.as_str())
    }

    /// The recorded failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&ValidationFailure> {
        self.failure.as_ref()
    }

    /// Current field values, including rewrites made by the presence rules.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Serializable view of the result.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            valid: self.is_valid(),
            error: self.error_message().to_owned(),
        }
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns the first recorded failure if any rule failed.
    pub fn finish(self) -> Result<FieldMap, ValidationFailure> {
        match self.failure {
            None => Ok(self.fields),
            Some(failure) => Err(failure),
        }
    }

    // ------------------------------------------------------------------------
    // Latch
    // ------------------------------------------------------------------------

    /// Marks the session invalid with a verbatim message.
    ///
    /// Does nothing if the session is already invalid.
    pub fn set_invalid(&mut self, message: impl Into<String>) -> &mut Self {
        if self.is_valid() {
            self.record(ValidationFailure::manual(message));
        }
        self
    }

    /// Returns `true` (and traces the skip) if `rule` must not run.
    pub(crate) fn latched(&self, rule: &'static str) -> bool {
        if self.is_valid() {
            return false;
        }
        tracing::trace!(rule, "session already invalid, rule skipped");
        true
    }

    /// Records a rule violation, substituting `field` into `template`.
    pub(crate) fn fail(&mut self, rule: &'static str, field: Option<&str>, template: &str) {
        let message = format_message(template, &self.config.placeholder, field).into_owned();
        self.record(ValidationFailure::rule(rule, field, message));
    }

    /// Latches `failure` unless a failure is already recorded.
    pub(crate) fn record(&mut self, failure: ValidationFailure) {
        if self.failure.is_some() {
            return;
        }
        tracing::debug!(
            rule = failure.rule,
            field = failure.field.as_deref(),
            kind = %failure.kind,
            "validation failed"
        );
        if self.config.policy == ExitPolicy::Halt
            && let Some(handler) = self.halt.as_mut()
        {
            tracing::debug!(rule = failure.rule, "halting on first failure");
            handler.halt(&failure);
        }
        self.failure = Some(failure);
    }

    pub(crate) fn host(&self) -> Option<&Arc<dyn PredicateResolver>> {
        self.host.as_ref()
    }

    pub(crate) fn fields_mut(&mut self) -> &mut FieldMap {
        &mut self.fields
    }

    /// Runs `violates` over every non-empty selected value, in order, until
    /// the session is invalid. Empty and missing values are skipped.
    pub(crate) fn check_present_values(
        &mut self,
        rule: &'static str,
        selector: FieldSelector<'_>,
        template: &str,
        mut violates: impl FnMut(&str) -> bool,
    ) -> &mut Self {
        for field in selector.iter() {
            if self.latched(rule) {
                break;
            }
            let violated = match self.fields.get(field) {
                Some(value) if !value.is_empty() => violates(value),
                _ => false,
            };
            if violated {
                self.fail(rule, Some(field), template);
            }
        }
        self
    }
}

impl Default for ValidationSession {
    fn default() -> Self {
        Self::from_fields(FieldMap::new())
    }
}

impl fmt::Debug for ValidationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSession")
            .field("fields", &self.fields)
            .field("config", &self.config)
            .field("failure", &self.failure)
            .field("host", &self.host.as_ref().map(|_| "<resolver>"))
            .field("halt", &self.halt.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

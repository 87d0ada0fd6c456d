//! Session configuration
//!
//! Loaded from JSON or assembled with the builder methods.
//!
//! ```json
//! { "policy": "halt", "length_mode": "bytes", "placeholder": "%s" }
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::error::ConfigError;
use crate::foundation::message::DEFAULT_PLACEHOLDER;

// ============================================================================
// EXIT POLICY
// ============================================================================

/// What happens when the first rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Record the failure and return control to the caller.
    #[default]
    Latch,
    /// Record the failure and hand it to the session's halt handler at once.
    Halt,
}

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How the length rules count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes of the UTF-8 encoding.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// VALIDATOR CONFIG
// ============================================================================

/// Settings for a [`ValidationSession`](crate::ValidationSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Exit policy on first failure.
    pub policy: ExitPolicy,
    /// Unit used by `min_length` / `max_length`.
    pub length_mode: LengthMode,
    /// Positional placeholder replaced with the failing field name.
    pub placeholder: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            policy: ExitPolicy::Latch,
            length_mode: LengthMode::Chars,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing keys take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys and
    /// [`ConfigError::InvalidPlaceholder`] for a placeholder with whitespace.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlaceholder`] for a placeholder with whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPlaceholder(self.placeholder.clone()));
        }
        Ok(())
    }

    /// Sets the exit policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_policy(mut self, policy: ExitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Sets the positional placeholder token.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

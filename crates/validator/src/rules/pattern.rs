//! Pattern and format rules
//!
//! Format rules only look at non-empty values: an empty or missing field is
//! never a format violation. Chain [`required`](ValidationSession::required)
//! first to enforce presence.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::foundation::FieldSelector;
use crate::session::ValidationSession;

// ============================================================================
// PATTERN
// ============================================================================

/// A regular expression that must match the whole value.
///
/// The source pattern is wrapped in `\A(?:...)\z`, so `"[0-9]+"` accepts
/// `"123"` but not `"123a"`.
///
/// # Examples
///
/// ```
/// use formgate_validator::rules::Pattern;
///
/// let zip = Pattern::new(r"\d{5}").unwrap();
/// assert!(zip.is_full_match("12345"));
/// assert!(!zip.is_full_match("123456"));
/// ```
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` for full-string matching.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for an invalid pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            source: pattern.to_owned(),
            regex: Regex::new(&format!(r"\A(?:{pattern})\z"))?,
        })
    }

    /// Returns `true` if the entire input matches.
    #[must_use]
    pub fn is_full_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// The pattern as written by the caller, without anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl TryFrom<&str> for Pattern {
    type Error = regex::Error;

    fn try_from(pattern: &str) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

fn builtin(pattern: &str) -> Pattern {
    Pattern::new(pattern).expect("built-in pattern must compile")
}

// Loose heuristic: optional scheme, optional `www.`, host, dot, 2-4 letter suffix.
static URL: LazyLock<Pattern> =
    LazyLock::new(|| builtin(r"(?i)(https?://)?(www\.)?[a-z0-9\-_.]+\.[a-z]{2,4}"));
static ALPHA: LazyLock<Pattern> = LazyLock::new(|| builtin("[A-Za-z]+"));
static ALPHA_SPACES: LazyLock<Pattern> = LazyLock::new(|| builtin("[A-Za-z ]+"));
static NUMERIC: LazyLock<Pattern> = LazyLock::new(|| builtin("[0-9]+"));
static NUMERIC_SPACES: LazyLock<Pattern> = LazyLock::new(|| builtin("[0-9 ]+"));
static ALPHANUMERIC: LazyLock<Pattern> = LazyLock::new(|| builtin("[A-Za-z0-9]+"));
static ALPHANUMERIC_SPACES: LazyLock<Pattern> = LazyLock::new(|| builtin("[A-Za-z0-9 ]+"));
static NO_SPACES: LazyLock<Pattern> = LazyLock::new(|| builtin("[^ ]+"));

/// Returns `true` if `value` consists of ASCII digits only.
pub(crate) fn is_digits(value: &str) -> bool {
    NUMERIC.is_full_match(value)
}

// ============================================================================
// RULES
// ============================================================================

impl ValidationSession {
    /// Fails on the first non-empty selected value that does not fully match `pattern`.
    pub fn matches_pattern<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        pattern: &Pattern,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("matches_pattern", selector.into(), pattern, message)
    }

    /// Requires a syntactically valid email address.
    ///
    /// Delegates to the `validator` crate's email grammar.
    pub fn is_email<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_present_values("is_email", selector.into(), message, |value| {
            !value.validate_email()
        })
    }

    /// Requires a URL-like value (`[http[s]://][www.]host.tld`).
    pub fn is_url<'a>(&mut self, selector: impl Into<FieldSelector<'a>>, message: &str) -> &mut Self {
        self.check_pattern("is_url", selector.into(), &URL, message)
    }

    /// ASCII letters only.
    pub fn is_alpha<'a>(&mut self, selector: impl Into<FieldSelector<'a>>, message: &str) -> &mut Self {
        self.check_pattern("is_alpha", selector.into(), &ALPHA, message)
    }

    /// ASCII letters and spaces.
    pub fn is_alpha_with_spaces<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("is_alpha_with_spaces", selector.into(), &ALPHA_SPACES, message)
    }

    /// ASCII digits only.
    pub fn is_numeric<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("is_numeric", selector.into(), &NUMERIC, message)
    }

    /// ASCII digits and spaces.
    pub fn is_numeric_with_spaces<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("is_numeric_with_spaces", selector.into(), &NUMERIC_SPACES, message)
    }

    /// ASCII letters and digits.
    pub fn is_alphanumeric<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("is_alphanumeric", selector.into(), &ALPHANUMERIC, message)
    }

    /// ASCII letters, digits and spaces.
    pub fn is_alphanumeric_with_spaces<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("is_alphanumeric_with_spaces", selector.into(), &ALPHANUMERIC_SPACES, message)
    }

    /// No space characters.
    pub fn has_no_spaces<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_pattern("has_no_spaces", selector.into(), &NO_SPACES, message)
    }

    fn check_pattern(
        &mut self,
        rule: &'static str,
        selector: FieldSelector<'_>,
        pattern: &Pattern,
        message: &str,
    ) -> &mut Self {
        self.check_present_values(rule, selector, message, |value| {
            !pattern.is_full_match(value)
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

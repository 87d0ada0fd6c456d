//! Presence rules
//!
//! The only rules that rewrite field values: both trim surrounding whitespace
//! and store the trimmed value back, so later rules see it.
//!
//! Trimming strips ASCII space, tab, newline, carriage return, NUL and
//! vertical tab. Other Unicode whitespace (e.g. NBSP) is kept.

use crate::foundation::FieldSelector;
use crate::session::ValidationSession;

const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

impl ValidationSession {
    /// Requires every selected field to hold a non-blank value.
    ///
    /// Missing values read as `""`. Each present value is trimmed and written
    /// back, even when the rule passes.
    pub fn required<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.trim_and_require("required", selector.into(), message, false)
    }

    /// Like [`required`](Self::required), but fields without a value are
    /// skipped instead of failing.
    pub fn required_if_present<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.trim_and_require("required_if_present", selector.into(), message, true)
    }

    fn trim_and_require(
        &mut self,
        rule: &'static str,
        selector: FieldSelector<'_>,
        message: &str,
        skip_missing: bool,
    ) -> &mut Self {
        for field in selector.iter() {
            if self.latched(rule) {
                break;
            }
            let trimmed = match self.fields().get(field) {
                Some(value) => value.trim_matches(TRIMMED).to_owned(),
                None if skip_missing => continue,
                None => String::new(),
            };
            let blank = trimmed.is_empty();
            self.fields_mut().rewrite(field, trimmed);
            if blank {
                self.fail(rule, Some(field), message);
            }
        }
        self
    }
}

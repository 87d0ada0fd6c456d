//! Field relationship and checkbox/select rules
//!
//! All comparisons are exact string comparisons; missing values compare as `""`.

use crate::session::ValidationSession;

impl ValidationSession {
    /// Requires `field` to hold exactly `expected`, e.g. a checkbox's checked value.
    pub fn must_equal_value(&mut self, field: &str, expected: &str, message: &str) -> &mut Self {
        self.compare_value("must_equal_value", field, expected, message)
    }

    /// Passes only when `field` equals the `empty_value` sentinel.
    ///
    /// Despite its name, this fails when an option *other than* the sentinel is
    /// selected. Existing callers rely on that.
    pub fn must_be_selected(&mut self, field: &str, message: &str, empty_value: &str) -> &mut Self {
        self.compare_value("must_be_selected", field, empty_value, message)
    }

    /// Requires `field_a` and `field_b` to hold the same value.
    pub fn fields_equal(&mut self, field_a: &str, field_b: &str, message: &str) -> &mut Self {
        if self.latched("fields_equal") {
            return self;
        }
        let fields = self.fields();
        if fields.get_or_empty(field_a) != fields.get_or_empty(field_b) {
            self.fail("fields_equal", Some(field_a), message);
        }
        self
    }

    fn compare_value(
        &mut self,
        rule: &'static str,
        field: &str,
        expected: &str,
        message: &str,
    ) -> &mut Self {
        if self.latched(rule) {
            return self;
        }
        if self.fields().get_or_empty(field) != expected {
            self.fail(rule, Some(field), message);
        }
        self
    }
}

//! Length and numeric bound rules
//!
//! Length is counted according to the session's
//! [`LengthMode`](crate::foundation::LengthMode): Unicode scalar values by
//! default, UTF-8 bytes when configured. Numeric bounds compare digit strings
//! as exact integers, never as strings or floats.

use std::cmp::Ordering;

use crate::foundation::FieldSelector;
use crate::rules::pattern::is_digits;
use crate::session::ValidationSession;

impl ValidationSession {
    /// Fails if a non-empty selected value is longer than `limit`.
    pub fn max_length<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        limit: usize,
        message: &str,
    ) -> &mut Self {
        let mode = self.config().length_mode;
        self.check_present_values("max_length", selector.into(), message, |value| {
            mode.measure(value) > limit
        })
    }

    /// Fails if a non-empty selected value is shorter than `limit`.
    pub fn min_length<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        limit: usize,
        message: &str,
    ) -> &mut Self {
        let mode = self.config().length_mode;
        self.check_present_values("min_length", selector.into(), message, |value| {
            mode.measure(value) < limit
        })
    }

    /// Requires a digits-only value that is not below `threshold`.
    ///
    /// A non-numeric value fails with this rule's `message`.
    pub fn numeric_greater_than<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        threshold: impl Into<i128>,
        message: &str,
    ) -> &mut Self {
        let threshold = threshold.into();
        self.check_present_values("numeric_greater_than", selector.into(), message, |value| {
            compare_digits(value, threshold).is_none_or(Ordering::is_lt)
        })
    }

    /// Requires a digits-only value that is not above `threshold`.
    ///
    /// A non-numeric value fails with this rule's `message`.
    pub fn numeric_less_than<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        threshold: impl Into<i128>,
        message: &str,
    ) -> &mut Self {
        let threshold = threshold.into();
        self.check_present_values("numeric_less_than", selector.into(), message, |value| {
            compare_digits(value, threshold).is_none_or(Ordering::is_gt)
        })
    }
}

/// Orders a digits-only string against `threshold`.
///
/// `None` for anything else (signs, decimals, spaces). Values too long for
/// `u128` are larger than any threshold.
fn compare_digits(value: &str, threshold: i128) -> Option<Ordering> {
    if !is_digits(value) {
        return None;
    }
    let Ok(threshold) = u128::try_from(threshold) else {
        return Some(Ordering::Greater);
    };
    Some(value.parse::<u128>().map_or(Ordering::Greater, |n| n.cmp(&threshold)))
}

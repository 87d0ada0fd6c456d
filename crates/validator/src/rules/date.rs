//! Date and datetime rules
//!
//! Format checks run in two stages: the value must match the layout, then the
//! captured year, month and day must form a real calendar date (leap years
//! included, year 0 rejected). Both stages fail with the same message.
//!
//! The all-zero sentinels `0000-00-00` and `0000-00-00 00:00:00` mean "no date"
//! and are skipped like empty values by the YMD and datetime rules.
//!
//! The time of day in [`is_date_time`](ValidationSession::is_date_time) is
//! matched as two-digit groups but not range checked.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};

use crate::foundation::FieldSelector;
use crate::session::ValidationSession;

const EMPTY_DATE: &str = "0000-00-00";
const EMPTY_DATETIME: &str = "0000-00-00 00:00:00";

const SECONDS_PER_DAY: i64 = 86_400;

static DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]{2})[^A-Za-z0-9]([0-9]{2})[^A-Za-z0-9]([0-9]{4})\z")
        .expect("DMY pattern must compile")
});
static YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]{4})-([0-9]{2})-([0-9]{2})\z").expect("YMD pattern must compile")
});
static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})\z")
        .expect("datetime pattern must compile")
});

/// Layouts accepted for the operands of the date comparison rules.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

// ============================================================================
// CALENDAR HELPERS
// ============================================================================

fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Groups are `(year, month, day)` capture indices.
fn captured_date(caps: &Captures<'_>, (y, m, d): (usize, usize, usize)) -> Option<NaiveDate> {
    calendar_date(&caps[y], &caps[m], &caps[d])
}

fn is_valid_dmy(value: &str) -> bool {
    DMY.captures(value)
        .and_then(|caps| captured_date(&caps, (3, 2, 1)))
        .is_some()
}

fn is_valid_ymd(value: &str) -> bool {
    YMD.captures(value)
        .and_then(|caps| captured_date(&caps, (1, 2, 3)))
        .is_some()
}

fn is_valid_datetime(value: &str) -> bool {
    DATETIME
        .captures(value)
        .and_then(|caps| captured_date(&caps, (1, 2, 3)))
        .is_some()
}

fn is_empty_date(value: &str) -> bool {
    value.is_empty() || value == EMPTY_DATE || value == EMPTY_DATETIME
}

/// Parses a comparison operand into a naive timestamp.
///
/// Day-first `DD?MM?YYYY` values are read the same way as [`is_date_dmy`]
/// reads them, whatever the separator.
///
/// [`is_date_dmy`]: ValidationSession::is_date_dmy
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Some(ts) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(ts);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DMY.captures(value)
                .and_then(|caps| captured_date(&caps, (3, 2, 1)))
        })
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Whole days from `b` to `a`, rounded half away from zero.
///
/// `None` if either value is not a recognised date.
pub(crate) fn date_difference_in_days(a: &str, b: &str) -> Option<i64> {
    let seconds = (parse_timestamp(a)? - parse_timestamp(b)?).num_seconds();
    Some((seconds.abs() + SECONDS_PER_DAY / 2) / SECONDS_PER_DAY * seconds.signum())
}

// ============================================================================
// RULES
// ============================================================================

impl ValidationSession {
    /// Requires a day-month-year date such as `31/12/2024` or `01.02.2024`.
    ///
    /// Any single non-alphanumeric character separates the parts; the two
    /// separators need not match.
    pub fn is_date_dmy<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_present_values("is_date_dmy", selector.into(), message, |value| {
            !is_valid_dmy(value)
        })
    }

    /// Requires an ISO date (`YYYY-MM-DD`). `0000-00-00` is skipped.
    pub fn is_date_ymd<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_present_values("is_date_ymd", selector.into(), message, |value| {
            value != EMPTY_DATE && !is_valid_ymd(value)
        })
    }

    /// Requires `YYYY-MM-DD HH:MM:SS`. `0000-00-00 00:00:00` is skipped.
    ///
    /// Only the date part is calendar checked.
    pub fn is_date_time<'a>(
        &mut self,
        selector: impl Into<FieldSelector<'a>>,
        message: &str,
    ) -> &mut Self {
        self.check_present_values("is_date_time", selector.into(), message, |value| {
            value != EMPTY_DATETIME && !is_valid_datetime(value)
        })
    }

    /// Fails if the date in `field_a` is earlier than the date in `field_b`.
    ///
    /// Skipped unless both fields hold a date. Equal dates pass.
    pub fn date_greater_than(&mut self, field_a: &str, field_b: &str, message: &str) -> &mut Self {
        self.compare_dates("date_greater_than", field_a, field_b, message, |days| days < 0)
    }

    /// Fails if the date in `field_a` is later than the date in `field_b`.
    ///
    /// Skipped unless both fields hold a date. Equal dates pass.
    pub fn date_less_than(&mut self, field_a: &str, field_b: &str, message: &str) -> &mut Self {
        self.compare_dates("date_less_than", field_a, field_b, message, |days| days > 0)
    }

    fn compare_dates(
        &mut self,
        rule: &'static str,
        field_a: &str,
        field_b: &str,
        message: &str,
        violates: impl FnOnce(i64) -> bool,
    ) -> &mut Self {
        if self.latched(rule) {
            return self;
        }
        let (a, b) = (
            self.fields().get_or_empty(field_a),
            self.fields().get_or_empty(field_b),
        );
        if is_empty_date(a) || is_empty_date(b) {
            return self;
        }
        // An operand that does not parse as a date cannot satisfy the ordering.
        if date_difference_in_days(a, b).is_none_or(violates) {
            self.fail(rule, Some(field_a), message);
        }
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

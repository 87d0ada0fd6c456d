//! The short-circuit latch: nothing changes once a session is invalid.

use std::cell::Cell;

use formgate_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

fn invalidated() -> ValidationSession {
    let mut session = ValidationSession::new([
        ("blank", "   "),
        ("padded", "  x  "),
        ("bad_date", "99/99/9999"),
        ("word", "abc"),
        ("a", "2024-01-02"),
        ("b", "2024-01-01"),
    ]);
    session.set_invalid("first failure");
    session
}

type Rule = fn(&mut ValidationSession);

#[rstest]
#[case::required(|s: &mut ValidationSession| { s.required(["blank", "padded"], "x"); })]
#[case::required_if_present(|s: &mut ValidationSession| { s.required_if_present("padded", "x"); })]
#[case::is_numeric(|s: &mut ValidationSession| { s.is_numeric("word", "x"); })]
#[case::is_email(|s: &mut ValidationSession| { s.is_email("word", "x"); })]
#[case::min_length(|s: &mut ValidationSession| { s.min_length("word", 10, "x"); })]
#[case::numeric_less_than(|s: &mut ValidationSession| { s.numeric_less_than("word", 1, "x"); })]
#[case::is_date_dmy(|s: &mut ValidationSession| { s.is_date_dmy("bad_date", "x"); })]
#[case::date_less_than(|s: &mut ValidationSession| { s.date_less_than("a", "b", "x"); })]
#[case::must_equal_value(|s: &mut ValidationSession| { s.must_equal_value("word", "zzz", "x"); })]
#[case::must_be_selected(|s: &mut ValidationSession| { s.must_be_selected("word", "x", ""); })]
#[case::fields_equal(|s: &mut ValidationSession| { s.fields_equal("a", "b", "x"); })]
#[case::callback(|s: &mut ValidationSession| { s.callback("missing", "x", ()); })]
#[case::set_invalid(|s: &mut ValidationSession| { s.set_invalid("x"); })]
fn later_rules_are_no_ops(#[case] rule: Rule) {
    let mut session = invalidated();
    let before = session.fields().clone();

    rule(&mut session);

    assert!(!session.is_valid());
    assert_eq!(session.error_message(), "first failure");
    assert_eq!(session.fields(), &before);
}

#[test]
fn instrumented_rule_is_never_invoked_after_failure() {
    let calls = Cell::new(0u32);
    let probe = |_: &[Value]| {
        calls.set(calls.get() + 1);
        false
    };

    let mut session = ValidationSession::new([("age", "x")]);
    session
        .callback(Callback::function(&probe), "first", ())
        .callback(Callback::function(&probe), "second", ())
        .callback(Callback::function(&probe), "third", ());

    assert_eq!(calls.get(), 1);
    assert_eq!(session.error_message(), "first");
}

#[test]
fn multi_field_rule_stops_inside_its_own_selector() {
    let mut session = ValidationSession::new([("a", "1"), ("b", "x"), ("c", "y")]);
    session.is_numeric(["a", "b", "c"], "%s must be digits");
    assert_eq!(session.error_message(), "b must be digits");
}

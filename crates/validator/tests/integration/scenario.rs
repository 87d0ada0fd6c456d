//! End-to-end rule chains.

use std::cell::Cell;

use formgate_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn signup() -> ValidationSession {
    ValidationSession::new([
        ("email", "a@b.com"),
        ("age", "17"),
        ("confirm", "a@b.com"),
    ])
}

#[test]
fn underage_signup_stops_at_numeric_bound() {
    let after = Cell::new(false);
    let probe = |_: &[Value]| {
        after.set(true);
        true
    };

    let mut session = signup();
    session
        .required(["email", "age"], "%s is required")
        .is_email("email", "%s is not an email")
        .numeric_greater_than("age", 18, "too young")
        .callback(Callback::function(&probe), "unreachable", ())
        .fields_equal("confirm", "email", "emails differ");

    assert!(!session.is_valid());
    assert_eq!(session.error_message(), "too young");
    assert!(!after.get(), "no rule may run after the first failure");
}

#[test]
fn adult_signup_passes_whole_chain() {
    let mut session = signup();
    session.with_fields([("email", " a@b.com "), ("age", "21"), ("confirm", "a@b.com")]);
    session
        .required(["email", "age"], "%s is required")
        .is_email("email", "%s is not an email")
        .numeric_greater_than("age", 18, "too young")
        .fields_equal("confirm", "email", "emails differ");

    assert!(session.is_valid());
    assert_eq!(session.error_message(), "");
    // `required` trimmed the email before `fields_equal` compared it.
    assert_eq!(session.fields().get("email"), Some("a@b.com"));
}

#[test]
fn format_rules_need_required_to_enforce_presence() {
    let mut session = ValidationSession::new([("email", "")]);
    session.is_email("email", "bad email").max_length("email", 3, "too long");
    assert!(session.is_valid());

    session.required("email", "%s is required");
    assert_eq!(session.error_message(), "email is required");
}

#[test]
fn booking_form() {
    let mut session = ValidationSession::new([
        ("guest", "Ada Lovelace"),
        ("check_in", "10/05/2024"),
        ("check_out", "2024-05-12"),
        ("created", "2024-04-01 09:30:00"),
        ("room", "--"),
        ("terms", "yes"),
    ]);
    session
        .required(["guest", "check_in", "check_out"], "%s is required")
        .is_alpha_with_spaces("guest", "%s: letters only")
        .is_date_dmy("check_in", "%s is not a date")
        .is_date_ymd("check_out", "%s is not a date")
        .is_date_time("created", "%s is not a timestamp")
        .date_greater_than("check_out", "check_in", "%s must not precede check-in")
        .must_be_selected("room", "choose a room", "--")
        .must_equal_value("terms", "yes", "accept the %s");

    assert!(session.is_valid(), "{}", session.error_message());

    let fields = session.finish().unwrap();
    assert_eq!(fields.get("guest"), Some("Ada Lovelace"));
}

#[test]
fn finish_surfaces_failure_as_error() {
    let mut session = ValidationSession::new([("zip", "12a45")]);
    session.is_numeric("zip", "%s must be digits");

    let failure = session.finish().unwrap_err();
    assert_eq!(failure.kind, FailureKind::Rule);
    assert_eq!(failure.rule, "is_numeric");
    assert_eq!(failure.field.as_deref(), Some("zip"));
    assert_eq!(failure.to_string(), "zip must be digits");
}

#[test]
fn custom_pattern_rule() {
    let postcode = Pattern::new(r"[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}").unwrap();
    let mut session = ValidationSession::new([("home", "SW1A 1AA"), ("work", "not a postcode")]);
    session.matches_pattern(["home", "work"], &postcode, "%s is not a postcode");

    assert_eq!(session.error_message(), "work is not a postcode");
}

#[test]
fn outcome_serializes_for_ajax_responses() {
    let mut session = signup();
    session.numeric_greater_than("age", 18, "too young");

    insta::assert_json_snapshot!(session.outcome(), @r#"
    {
      "valid": false,
      "error": "too young"
    }
    "#);
}

#[test]
fn failure_serializes_with_kind_and_field() {
    let mut session = signup();
    session.numeric_greater_than("age", 18, "too young");

    insta::assert_json_snapshot!(session.failure(), @r#"
    {
      "kind": "rule",
      "rule": "numeric_greater_than",
      "field": "age",
      "message": "too young"
    }
    "#);
}

//! Configuration loading and exit policies.

use std::cell::RefCell;
use std::rc::Rc;

use formgate_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn halt_policy_from_json_reports_first_failure_only() {
    let config = ValidatorConfig::from_json_str(r#"{"policy": "halt"}"#).unwrap();
    let halted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&halted);

    let mut session = ValidationSession::new([("name", ""), ("age", "abc")])
        .with_config(config)
        .on_halt(move |failure: &ValidationFailure| sink.borrow_mut().push(failure.clone()));
    session
        .required("name", "%s is required")
        .is_numeric("age", "%s must be digits");

    let halted = halted.borrow();
    assert_eq!(halted.len(), 1);
    assert_eq!(halted[0].message, "name is required");
    assert_eq!(halted[0].field.as_deref(), Some("name"));
}

#[test]
fn byte_length_mode_from_json() {
    let config = ValidatorConfig::from_json_str(r#"{"length_mode": "bytes"}"#).unwrap();
    let mut session = ValidationSession::new([("city", "Zürich")]).with_config(config);
    session.max_length("city", 6, "%s too long");
    assert_eq!(session.error_message(), "city too long");
}

#[test]
fn custom_placeholder_from_json() {
    let config = ValidatorConfig::from_json_str(r#"{"placeholder": ":field"}"#).unwrap();
    let mut session = ValidationSession::new([("zip", "")]).with_config(config);
    session.required("zip", "The :field field is required");
    assert_eq!(session.error_message(), "The zip field is required");
}

#[test]
fn malformed_config_is_an_error() {
    assert!(matches!(
        ValidatorConfig::from_json_str(r#"{"policy": "explode"}"#),
        Err(ConfigError::Parse(_))
    ));
}

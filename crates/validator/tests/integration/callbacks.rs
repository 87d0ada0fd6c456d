//! Callback rule against an injected host service.

use std::collections::HashSet;
use std::sync::Arc;

use formgate_validator::prelude::*;
use serde_json::Value;

/// Host-owned service shared with the validation layer.
struct Directory {
    usernames: HashSet<String>,
}

impl Directory {
    fn username_free(&self, name: &str) -> bool {
        !self.usernames.contains(name)
    }

    fn domain_allowed(&self, email: &str, domain: &str) -> bool {
        email.ends_with(&format!("@{domain}"))
    }
}

impl PredicateResolver for Directory {
    fn call(&self, name: &str, params: &[Value]) -> Option<bool> {
        let arg = move |i: usize| params.get(i).and_then(Value::as_str).unwrap_or_default();
        match name {
            "username_free" => Some(self.username_free(arg(0))),
            "domain_allowed" => Some(self.domain_allowed(arg(0), arg(1))),
            _ => None,
        }
    }
}

fn directory() -> Arc<Directory> {
    Arc::new(Directory {
        usernames: HashSet::from(["ada".to_owned()]),
    })
}

#[test]
fn host_methods_receive_field_values() {
    let mut session = ValidationSession::new([("user", "grace"), ("email", "grace@navy.mil")])
        .with_host(directory());

    let user = session.fields().get_or_empty("user").to_owned();
    let email = session.fields().get_or_empty("email").to_owned();
    session
        .callback("username_free", "username taken", user.as_str())
        .callback("domain_allowed", "wrong domain", [email.as_str(), "navy.mil"]);

    assert!(session.is_valid(), "{}", session.error_message());
}

#[test]
fn host_method_failure_uses_caller_message() {
    let mut session = ValidationSession::default().with_host(directory());
    session.callback("username_free", "username taken", "ada");
    assert_eq!(session.error_message(), "username taken");
}

#[test]
fn unknown_host_method_is_a_resolution_failure() {
    let mut session = ValidationSession::default().with_host(directory());
    session.callback("username_unique", "username taken", "ada");

    let failure = session.failure().unwrap();
    assert_eq!(failure.kind, FailureKind::UnresolvedCallback);
    assert_ne!(failure.message, "username taken");
}

#[test]
fn registry_as_host() {
    let registry = PredicateRegistry::new().register("non_empty_list", |params: &[Value]| {
        params.first().and_then(Value::as_array).is_some_and(|items| !items.is_empty())
    });
    let mut session = ValidationSession::default().with_host(Arc::new(registry));
    session.callback("non_empty_list", "pick at least one tag", Value::Array(Vec::new()));
    assert_eq!(session.error_message(), "pick at least one tag");
}

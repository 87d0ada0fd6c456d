//! Basic usage example for formgate-validator

use formgate_validator::prelude::*;

fn main() {
    let mut session = ValidationSession::new([
        ("email", "ada@example.com"),
        ("age", "17"),
        ("start", "2024-05-01"),
        ("end", "2024-05-10"),
    ]);

    session
        .required(["email", "age"], "%s is required")
        .is_email("email", "%s is not a valid email address")
        .date_greater_than("end", "start", "%s must not precede start")
        .numeric_greater_than("age", 18, "You must be at least 18");

    match session.finish() {
        Ok(fields) => println!("✓ valid: {} fields", fields.len()),
        Err(failure) => println!("✗ {} (rule `{}`)", failure, failure.rule),
    }
}

//! Built-in rule families
//!
//! Every rule is a method on [`ValidationSession`](crate::ValidationSession)
//! that returns `&mut Self`. A rule first checks the session latch: once the
//! session is invalid, the rule returns without reading or rewriting fields.
//!
//! | Family | Rules |
//! |---|---|
//! | presence | `required`, `required_if_present` |
//! | pattern | `matches_pattern`, `is_email`, `is_url`, `is_alpha`, `is_numeric`, ... |
//! | bounds | `max_length`, `min_length`, `numeric_greater_than`, `numeric_less_than` |
//! | date | `is_date_dmy`, `is_date_ymd`, `is_date_time`, `date_greater_than`, `date_less_than` |
//! | relation | `must_equal_value`, `must_be_selected`, `fields_equal` |
//! | callback | `callback` |

pub mod bounds;
pub mod callback;
pub mod date;
pub mod pattern;
pub mod presence;
pub mod relation;

pub use callback::{Callback, IntoParams, PredicateRegistry, PredicateResolver};
pub use pattern::Pattern;

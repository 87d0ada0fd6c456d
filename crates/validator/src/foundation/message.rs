//! Error message templates
//!
//! Caller-authored messages may contain one positional placeholder
//! (`%s` by default) that is replaced with the name of the failing field.

use std::borrow::Cow;

/// Default positional placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "%s";

/// Substitutes `field` for the first occurrence of `placeholder` in `template`.
///
/// Templates without the placeholder are returned verbatim, without
/// allocating. An empty placeholder disables substitution.
///
/// # Examples
///
/// ```
/// use formgate_validator::foundation::format_message;
///
/// assert_eq!(format_message("%s is required", "%s", Some("email")), "email is required");
/// assert_eq!(format_message("Too young", "%s", Some("age")), "Too young");
/// assert_eq!(format_message("%s is required", "%s", None), "%s is required");
/// ```
#[must_use]
pub fn format_message<'t>(template: &'t str, placeholder: &str, field: Option<&str>) -> Cow<'t, str> {
    match field {
        Some(field) if !placeholder.is_empty() && template.contains(placeholder) => {
            Cow::Owned(template.replacen(placeholder, field, 1))
        }
        _ => Cow::Borrowed(template),
    }
}

//! Input validation for user create/replace bodies.

use std::sync::LazyLock;

use regex::Regex;
use user_api_common::{FieldErrors, UserDraft, UserRequest};

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 50;
const NAME_MAX_CHARS: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.]+$").expect("email pattern is valid")
});

/// Check a request body and turn it into a draft the store accepts.
///
/// Every field is trimmed first. On failure each rejected field carries the
/// message of the first rule it broke.
pub fn validate_user(request: UserRequest) -> Result<UserDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = required(&mut errors, "username", request.username, "Username is required");
    if let Some(ref name) = username {
        let len = name.chars().count();
        if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&len) {
            errors.insert(
                "username".to_string(),
                format!(
                    "Username must be between {} and {} characters",
                    USERNAME_MIN_CHARS, USERNAME_MAX_CHARS
                ),
            );
        }
    }

    let email = required(&mut errors, "email", request.email, "Email is required");
    if let Some(ref email) = email {
        if !EMAIL_RE.is_match(email) {
            errors.insert("email".to_string(), "Email should be valid".to_string());
        }
    }

    let first_name = required(&mut errors, "firstName", request.first_name, "First name is required");
    if let Some(ref name) = first_name {
        max_chars(&mut errors, "firstName", name, "First name");
    }

    let last_name = required(&mut errors, "lastName", request.last_name, "Last name is required");
    if let Some(ref name) = last_name {
        max_chars(&mut errors, "lastName", name, "Last name");
    }

    match (username, email, first_name, last_name) {
        (Some(username), Some(email), Some(first_name), Some(last_name)) if errors.is_empty() => {
            Ok(UserDraft {
                username,
                email,
                first_name,
                last_name,
                active: request.active,
            })
        }
        _ => Err(errors),
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    message: &str,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.insert(field.to_string(), message.to_string());
            None
        }
    }
}

fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    if value.chars().count() > NAME_MAX_CHARS {
        errors.insert(
            field.to_string(),
            format!("{} must not exceed {} characters", label, NAME_MAX_CHARS),
        );
    }
}

use email_address::EmailAddress;

use crate::{
    errors::{ValidationError, ValidationIssue, ValidationResult},
    types::MonkeyFields,
};

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_AGE: u32 = 200;

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

pub fn validate_monkey_fields(fields: &MonkeyFields) -> ValidationResult<()> {
    let mut issues = Vec::new();

    if fields.name.is_empty() {
        issues.push(ValidationIssue::new("name", "validation.required", "name is required"));
    } else if fields.name.chars().count() > MAX_NAME_LENGTH {
        issues.push(ValidationIssue::new(
            "name",
            "validation.length",
            format!("length must be at most {MAX_NAME_LENGTH}"),
        ));
    }

    if fields.age > MAX_AGE {
        issues.push(ValidationIssue::new(
            "age",
            "validation.range",
            format!("value must be at most {MAX_AGE}"),
        ));
    }

    if fields.email.is_empty() {
        issues.push(ValidationIssue::new("email", "validation.required", "email is required"));
    } else if !is_valid_email(&fields.email) {
        issues.push(ValidationIssue::new("email", "validation.email", "email is not a valid address"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

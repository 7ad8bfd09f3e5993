use std::{borrow::Cow, str::FromStr, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Field, FieldErrors, FormFields};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn name_rule(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("required", NAME_REQUIRED));
    }

    Ok(())
}

pub(crate) fn email_rule(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("required", EMAIL_REQUIRED));
    }

    // Matched against the raw value: padded addresses are rejected here.
    if !EMAIL_PATTERN.is_match(value) {
        return Err(rule_error("email", EMAIL_INVALID));
    }

    Ok(())
}

pub(crate) fn message_rule(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(rule_error("required", MESSAGE_REQUIRED));
    }

    // Counted in UTF-16 units, the way browsers report input length.
    if trimmed.encode_utf16().count() < MESSAGE_MIN_CHARS {
        return Err(rule_error("length", MESSAGE_TOO_SHORT));
    }

    Ok(())
}

/// Runs every field rule and returns the failing fields only.
///
/// An empty result means the form can be submitted.
pub fn validate(fields: &FormFields) -> FieldErrors {
    match fields.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => errors.into(),
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        errors
            .field_errors()
            .into_iter()
            .filter_map(|(name, errors)| {
                let field = Field::from_str(&name).ok()?;
                let message = errors.first()?.message.as_ref()?.to_string();

                Some((field, message))
            })
            .collect()
    }
}

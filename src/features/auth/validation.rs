//! Client-side field rules for the signup and login forms. These only gate the
//! network call; the API performs its own validation.

use regex::Regex;
use std::fmt;

const NAME_PATTERN: &str = r"^[А-Я][а-я]+\s*$";
const PASSWORD_PATTERN: &str = r"^[0-9a-zA-Z]{8,}$";
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Pattern,
    Email,
    MustAccept,
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Required => "Обязательное поле",
            Self::Pattern => "Неверный формат",
            Self::Email => "Некорректный email",
            Self::MustAccept => "Необходимо согласие",
        };
        formatter.write_str(text)
    }
}

fn matches(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

/// A capitalised Cyrillic word, optionally followed by whitespace.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if matches(NAME_PATTERN, value) {
        Ok(())
    } else {
        Err(FieldError::Pattern)
    }
}

/// The e-mail grammar browsers apply to `<input type="email">`, plus the RFC
/// length limits.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let local_length = value.split('@').next().map_or(0, str::len);
    if value.len() > MAX_EMAIL_LENGTH || local_length > MAX_EMAIL_LOCAL_LENGTH {
        return Err(FieldError::Email);
    }
    if matches(EMAIL_PATTERN, value) {
        Ok(())
    } else {
        Err(FieldError::Email)
    }
}

/// At least eight ASCII letters or digits, mixing a digit, a lowercase and an
/// uppercase letter.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let mixed = value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase());
    if mixed && matches(PASSWORD_PATTERN, value) {
        Ok(())
    } else {
        Err(FieldError::Pattern)
    }
}

/// Login only checks presence; the stored password is the server's business.
pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

pub fn validate_consent(agree: bool) -> Result<(), FieldError> {
    if agree {
        Ok(())
    } else {
        Err(FieldError::MustAccept)
    }
}

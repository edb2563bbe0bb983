//! Server-side validation rules for contact submissions
//!
//! Rules run in a fixed order and stop at the first failure. The form-level
//! validator in `application::dto` reuses the same primitives but reports
//! every field independently.

use crate::domain::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Cached regex patterns
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Invalid name regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid mobile regex"));

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MOBILE_PREFIXES: [char; 4] = ['6', '7', '8', '9'];

/// Column widths of the `contacts` table, mirrored by the form-level checks.
pub mod limits {
    pub const SALUTATION: usize = 10;
    pub const NAME: usize = 100;
    pub const EMAIL: usize = 255;
    pub const MOBILE: usize = 20;
    pub const COMPANY: usize = 200;
    pub const MESSAGE: usize = 5000;
    pub const SCREEN_RESOLUTION: usize = 20;
    pub const LANGUAGE: usize = 35;
    pub const TIMEZONE: usize = 100;
    pub const REFERRER: usize = 2048;
}

/// Borrowed view of the user-entered fields of a submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFields<'a> {
    pub salutation: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub mobile: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Which fields count as mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_salutation: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_salutation: true,
        }
    }
}

/// Ordered, short-circuiting validator
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactValidator {
    policy: ValidationPolicy,
}

impl ContactValidator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate a submission, returning the first violated rule.
    pub fn validate(&self, fields: &ContactFields<'_>) -> Result<(), ValidationError> {
        let first_name = trimmed(fields.first_name);
        let last_name = trimmed(fields.last_name);
        let email = trimmed(fields.email);
        let mobile = trimmed(fields.mobile);
        let message = trimmed(fields.message);

        // 1. Presence
        let salutation_missing =
            self.policy.require_salutation && trimmed(fields.salutation).is_empty();
        if salutation_missing
            || [first_name, last_name, email, mobile, message]
                .iter()
                .any(|value| value.is_empty())
        {
            return Err(ValidationError::MissingRequiredFields);
        }

        // 2. Name length
        if char_len(first_name) < MIN_NAME_LENGTH || char_len(last_name) < MIN_NAME_LENGTH {
            return Err(ValidationError::NameTooShort);
        }

        // 3. Message length
        if char_len(message) < MIN_MESSAGE_LENGTH {
            return Err(ValidationError::MessageTooShort);
        }

        // 4. Name characters
        if !is_valid_name(first_name) || !is_valid_name(last_name) {
            return Err(ValidationError::InvalidNameCharacters);
        }

        // 5. Email shape
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        // 6. Mobile format, then prefix
        check_mobile(mobile)
    }
}

/// Letters and spaces only.
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Basic `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Strip whitespace and dashes from a mobile number.
pub fn normalize_mobile(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Ten digits starting with 6, 7, 8 or 9.
pub fn check_mobile(value: &str) -> Result<(), ValidationError> {
    let digits = normalize_mobile(value);
    if !MOBILE_REGEX.is_match(&digits) {
        return Err(ValidationError::InvalidMobileFormat);
    }

    match digits.chars().next() {
        Some(first) if MOBILE_PREFIXES.contains(&first) => Ok(()),
        _ => Err(ValidationError::InvalidMobilePrefix),
    }
}

pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}

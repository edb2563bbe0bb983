use thiserror::Error;

/// Reasons a contact submission is rejected by the server-side validator.
///
/// Only the first failing rule is ever reported; the `Display` text is
/// returned verbatim to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("First name and last name must be at least 3 characters long")]
    NameTooShort,

    #[error("Message is too short: it must be at least 10 characters long")]
    MessageTooShort,

    #[error("First name and last name contain invalid characters: only letters and spaces are allowed")]
    InvalidNameCharacters,

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobileFormat,

    #[error("Invalid mobile number prefix: it must start with 6, 7, 8 or 9")]
    InvalidMobilePrefix,
}

impl ValidationError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "missing_required_fields",
            Self::NameTooShort => "name_too_short",
            Self::MessageTooShort => "message_too_short",
            Self::InvalidNameCharacters => "invalid_name_characters",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidMobileFormat => "invalid_mobile_format",
            Self::InvalidMobilePrefix => "invalid_mobile_prefix",
        }
    }
}

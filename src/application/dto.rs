use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    entities::ContactRecord,
    validation::{self, char_len, limits, ContactFields, MIN_MESSAGE_LENGTH, MIN_NAME_LENGTH},
};

/// Contact form payload as sent by the browser.
///
/// Every field is optional at the type level: presence is a validation
/// concern, not a parsing one. The `Validate` derive drives the form-level
/// checks (one message per field); the ordered server-side rules live in
/// [`validation::ContactValidator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[validate(custom(function = "validate_salutation"))]
    pub salutation: Option<String>,
    #[validate(
        required(message = "First name is required"),
        custom(function = "validate_first_name")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Last name is required"),
        custom(function = "validate_last_name")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "Email is required"),
        custom(function = "validate_email_field")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Mobile number is required"),
        custom(function = "validate_mobile_field")
    )]
    pub mobile: Option<String>,
    #[validate(custom(function = "validate_company"))]
    pub company: Option<String>,
    #[validate(
        required(message = "Message is required"),
        custom(function = "validate_message_field")
    )]
    pub message: Option<String>,
    // Enrichment, collected by the page rather than typed by the user
    pub user_agent: Option<String>,
    #[validate(custom(function = "validate_language"))]
    pub language: Option<String>,
    #[validate(custom(function = "validate_screen_resolution"))]
    pub screen_resolution: Option<String>,
    #[validate(custom(function = "validate_timezone"))]
    pub timezone: Option<String>,
    #[validate(custom(function = "validate_referrer"))]
    pub referrer: Option<String>,
    pub browser: Option<String>,
    pub operating_system: Option<String>,
    pub device_type: Option<String>,
}

impl ContactSubmission {
    /// Borrowed view consumed by the server-side validator
    pub fn fields(&self) -> ContactFields<'_> {
        ContactFields {
            salutation: self.salutation.as_deref(),
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            email: self.email.as_deref(),
            mobile: self.mobile.as_deref(),
            message: self.message.as_deref(),
        }
    }
}

fn violation(code: &'static str, message: String) -> validator::ValidationError {
    validator::ValidationError::new(code).with_message(message.into())
}

fn check_max(value: &str, max: usize, label: &str) -> Result<(), validator::ValidationError> {
    if char_len(value) > max {
        return Err(violation(
            "too_long",
            format!("{label} must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn check_person_name(value: &str, label: &str) -> Result<(), validator::ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(violation("required", format!("{label} is required")));
    }
    if char_len(value) < MIN_NAME_LENGTH {
        return Err(violation(
            "too_short",
            format!("{label} must be at least {MIN_NAME_LENGTH} characters"),
        ));
    }
    check_max(value, limits::NAME, label)?;
    if !validation::is_valid_name(value) {
        return Err(violation(
            "invalid_characters",
            format!("{label} can only contain letters and spaces"),
        ));
    }
    Ok(())
}

fn validate_salutation(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value.trim(), limits::SALUTATION, "Salutation")
}

fn validate_first_name(value: &str) -> Result<(), validator::ValidationError> {
    check_person_name(value, "First name")
}

fn validate_last_name(value: &str) -> Result<(), validator::ValidationError> {
    check_person_name(value, "Last name")
}

fn validate_email_field(value: &str) -> Result<(), validator::ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(violation("required", "Email is required".to_string()));
    }
    check_max(value, limits::EMAIL, "Email")?;
    if !validation::is_valid_email(value) {
        return Err(violation(
            "invalid_email",
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

fn validate_mobile_field(value: &str) -> Result<(), validator::ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(violation("required", "Mobile number is required".to_string()));
    }
    validation::check_mobile(value).map_err(|e| violation(e.code(), e.to_string()))
}

fn validate_company(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value.trim(), limits::COMPANY, "Company name")
}

fn validate_message_field(value: &str) -> Result<(), validator::ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(violation("required", "Message is required".to_string()));
    }
    if char_len(value) < MIN_MESSAGE_LENGTH {
        return Err(violation(
            "too_short",
            format!("Message must be at least {MIN_MESSAGE_LENGTH} characters"),
        ));
    }
    check_max(value, limits::MESSAGE, "Message")
}

fn validate_language(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value, limits::LANGUAGE, "Language")
}

fn validate_screen_resolution(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value, limits::SCREEN_RESOLUTION, "Screen resolution")
}

fn validate_timezone(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value, limits::TIMEZONE, "Timezone")
}

fn validate_referrer(value: &str) -> Result<(), validator::ValidationError> {
    check_max(value, limits::REFERRER, "Referrer")
}

/// Stored contact as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactRecordDto {
    pub id: i64,
    pub salutation: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub company: Option<String>,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub browser: Option<String>,
    pub operating_system: Option<String>,
    pub device_type: Option<String>,
    pub screen_resolution: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub referrer: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ContactRecord> for ContactRecordDto {
    fn from(record: ContactRecord) -> Self {
        let (id, contact, created_at) = record.into_parts();
        Self {
            id,
            salutation: contact.salutation,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            mobile: contact.mobile,
            company: contact.company,
            message: contact.message,
            ip_address: contact.ip_address,
            user_agent: contact.user_agent,
            browser: contact.browser,
            operating_system: contact.operating_system,
            device_type: contact.device_type,
            screen_resolution: contact.screen_resolution,
            language: contact.language,
            timezone: contact.timezone,
            referrer: contact.referrer,
            created_at,
        }
    }
}

/// Body of a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitContactResponse {
    pub success: bool,
    pub message: String,
    pub data: ContactRecordDto,
}

/// Body of the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListContactsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ContactRecordDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidateContactResponse {
    pub success: bool,
    pub valid: bool,
}

/// One form-level violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

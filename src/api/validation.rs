use validator::Validate;

use crate::application::dto::{ContactSubmission, FieldError};
use crate::domain::validation::ValidationPolicy;

/// Form field order, used to keep error lists stable
const FIELD_ORDER: [&str; 11] = [
    "salutation",
    "firstName",
    "lastName",
    "email",
    "mobile",
    "company",
    "message",
    "language",
    "screenResolution",
    "timezone",
    "referrer",
];

/// Run the form-level checks, collecting one message per field.
///
/// Unlike the server-side validator this never stops at the first failure.
pub fn collect_field_errors(
    submission: &ContactSubmission,
    policy: ValidationPolicy,
) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = match submission.validate() {
        Ok(()) => Vec::new(),
        Err(validation_errors) => validation_errors
            .field_errors()
            .iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|error| FieldError {
                    field: to_camel_case(field),
                    message: error
                        .message
                        .as_ref()
                        .map(|cow| cow.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect(),
    };

    let salutation_blank = submission
        .salutation
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .is_empty();
    if policy.require_salutation && salutation_blank {
        field_errors.push(FieldError {
            field: "salutation".to_string(),
            message: "Please select a salutation".to_string(),
        });
    }

    field_errors.sort_by_key(|error| {
        FIELD_ORDER
            .iter()
            .position(|name| *name == error.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    field_errors
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

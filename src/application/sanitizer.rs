//! Normalization of already-validated submissions
//!
//! Never rejects input: validation has run before this point.

use crate::application::dto::ContactSubmission;
use crate::domain::entities::NewContact;
use crate::domain::value_objects::DeviceInfo;

/// Server-derived metadata attached to a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub ip_address: Option<String>,
    pub device: Option<DeviceInfo>,
}

/// Trim user-entered fields and map absent optionals to `None`.
///
/// Enrichment values are passed through as received. Server-side device
/// classification, when present, takes precedence over client-supplied labels.
pub fn sanitize(submission: &ContactSubmission, enrichment: Enrichment) -> NewContact {
    let (browser, operating_system, device_type) = match enrichment.device {
        Some(device) => (
            Some(device.browser),
            Some(device.operating_system),
            Some(device.device_type),
        ),
        None => (
            submission.browser.clone(),
            submission.operating_system.clone(),
            submission.device_type.clone(),
        ),
    };

    NewContact {
        salutation: non_empty(submission.salutation.as_deref()),
        first_name: trim_owned(submission.first_name.as_deref()),
        last_name: trim_owned(submission.last_name.as_deref()),
        email: trim_owned(submission.email.as_deref()),
        mobile: trim_owned(submission.mobile.as_deref()),
        company: non_empty(submission.company.as_deref()),
        message: trim_owned(submission.message.as_deref()),
        ip_address: enrichment.ip_address,
        user_agent: submission.user_agent.clone(),
        browser,
        operating_system,
        device_type,
        screen_resolution: submission.screen_resolution.clone(),
        language: submission.language.clone(),
        timezone: submission.timezone.clone(),
        referrer: submission.referrer.clone(),
    }
}

fn trim_owned(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sanitized submission, ready to be inserted.
///
/// Optional fields are `None` rather than empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
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
}

/// A persisted contact request. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    id: i64,
    contact: NewContact,
    created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(id: i64, contact: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            contact,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn contact(&self) -> &NewContact {
        &self.contact
    }

    pub fn into_parts(self) -> (i64, NewContact, DateTime<Utc>) {
        (self.id, self.contact, self.created_at)
    }
}

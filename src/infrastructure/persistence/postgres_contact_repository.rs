use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{ContactRepository, PersistenceError};
use crate::domain::entities::{ContactRecord, NewContact};

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: &NewContact) -> Result<ContactRecord, PersistenceError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (
                salutation, first_name, last_name, email, mobile, company, message,
                ip_address, user_agent, browser, operating_system, device_type,
                screen_resolution, language, timezone, referrer
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, salutation, first_name, last_name, email, mobile, company, message,
                      ip_address, user_agent, browser, operating_system, device_type,
                      screen_resolution, language, timezone, referrer, created_at
            "#,
        )
        .bind(&contact.salutation)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.mobile)
        .bind(&contact.company)
        .bind(&contact.message)
        .bind(&contact.ip_address)
        .bind(&contact.user_agent)
        .bind(&contact.browser)
        .bind(&contact.operating_system)
        .bind(&contact.device_type)
        .bind(&contact.screen_resolution)
        .bind(&contact.language)
        .bind(&contact.timezone)
        .bind(&contact.referrer)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_domain())
    }

    async fn list_all(&self) -> Result<Vec<ContactRecord>, PersistenceError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, salutation, first_name, last_name, email, mobile, company, message,
                   ip_address, user_agent, browser, operating_system, device_type,
                   screen_resolution, language, timezone, referrer, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_domain()).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: i64,
    salutation: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    mobile: String,
    company: Option<String>,
    message: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
    browser: Option<String>,
    operating_system: Option<String>,
    device_type: Option<String>,
    screen_resolution: Option<String>,
    language: Option<String>,
    timezone: Option<String>,
    referrer: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl ContactRow {
    fn into_domain(self) -> ContactRecord {
        let contact = NewContact {
            salutation: self.salutation,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile: self.mobile,
            company: self.company,
            message: self.message,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            browser: self.browser,
            operating_system: self.operating_system,
            device_type: self.device_type,
            screen_resolution: self.screen_resolution,
            language: self.language,
            timezone: self.timezone,
            referrer: self.referrer,
        };

        ContactRecord::reconstruct(self.id, contact, self.created_at)
    }
}

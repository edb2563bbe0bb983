use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use std::env;

use portfolio_contact::{
    application::ports::ContactRepository,
    domain::validation::{ContactFields, ContactValidator, ValidationPolicy},
    infrastructure::persistence::PostgresContactRepository,
};

/// Re-check stored contacts against the current validation rules. Read-only.
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Accept rows without a salutation
    #[arg(long)]
    allow_missing_salutation: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&db_url)
        .await
        .context("failed to connect to database")?;

    let repo = PostgresContactRepository::new(pool);
    let contacts = repo.list_all().await.context("failed to list contacts")?;

    let validator = ContactValidator::new(ValidationPolicy {
        require_salutation: !cli.allow_missing_salutation,
    });

    let mut invalid = 0usize;
    for record in &contacts {
        let contact = record.contact();
        let fields = ContactFields {
            salutation: contact.salutation.as_deref(),
            first_name: Some(contact.first_name.as_str()),
            last_name: Some(contact.last_name.as_str()),
            email: Some(contact.email.as_str()),
            mobile: Some(contact.mobile.as_str()),
            message: Some(contact.message.as_str()),
        };

        if let Err(e) = validator.validate(&fields) {
            invalid += 1;
            println!(
                "id: {}, created_at: {}, rule: {}, error: {}",
                record.id(),
                record.created_at().to_rfc3339(),
                e.code(),
                e
            );
        }
    }

    println!("Checked {} contacts, {} failing current rules", contacts.len(), invalid);

    Ok(())
}

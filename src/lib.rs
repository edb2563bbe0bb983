//! # Portfolio Contact - contact form submission service
//!
//! Accepts contact requests from a portfolio site, validates and sanitizes
//! them, enriches them with client metadata and stores them in PostgreSQL.
//!
//! ## Architecture Layers
//!
//! - **Domain**: validation rules, contact entities, device labels
//! - **Application**: use cases, DTOs and ports (interfaces)
//! - **Infrastructure**: PostgreSQL repository and user-agent classifier
//! - **API**: transport-agnostic request handling plus the axum and
//!   serverless-function adapters
//!
//! ## Example Usage
//!
//! ```no_run
//! use portfolio_contact::{application::builder::ApplicationBuilder, create_router, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::from_env())
//!     .with_database()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use api::{create_router, ApiSettings, ContactApi};
pub use application::{dto, ports, use_cases};
pub use config::{Config, LogFormat};
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};

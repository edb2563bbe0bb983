pub mod client_ip;
pub mod cors;
pub mod errors;
pub mod handlers;
pub mod openapi;
pub mod request;
pub mod router;
pub mod serverless;
pub mod service;
pub mod validation;

pub use router::create_router;
pub use service::{ApiSettings, ContactApi};

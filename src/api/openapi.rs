use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{
    ContactRecordDto, ContactSubmission, ErrorResponse, FieldError, HealthResponse,
    ListContactsResponse, SubmitContactResponse, ValidateContactResponse,
};

/// OpenAPI specification for the contact API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Contact API",
        version = "1.0.0",
        description = "Contact form submissions for the portfolio site"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::contact::submit_contact_handler,
        crate::api::handlers::contact::validate_contact_handler,
        crate::api::handlers::contacts::list_contacts_handler,
    ),
    components(
        schemas(
            ContactSubmission,
            ContactRecordDto,
            SubmitContactResponse,
            ListContactsResponse,
            ValidateContactResponse,
            HealthResponse,
            FieldError,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

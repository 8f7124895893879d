//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{borrows, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circulation API",
        version = "0.1.0",
        description = "Book borrowing and reporting REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Borrows
        borrows::borrow_book,
        borrows::borrow_summary,
    ),
    components(
        schemas(
            crate::models::borrow::BorrowRecord,
            crate::models::borrow::CreateBorrowRequest,
            crate::models::borrow::BorrowedBook,
            crate::models::borrow::BorrowSummary,
            crate::error::ErrorResponse,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "borrows", description = "Borrow registration and reporting"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

/// Create router serving the Swagger UI and the OpenAPI JSON document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

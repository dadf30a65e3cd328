use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    errors::FieldError,
    models::{
        Appointment, AppointmentPayload, CreatedResponse, DiagnosticsResponse, ErrorResponse,
        MessageResponse, Product, ProductCategory, ProductListing, ProductPayload, ServiceType,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Status endpoints
        crate::routes::status::read_root,
        crate::routes::status::hello,
        crate::routes::status::health_check,
        crate::routes::status::test_database,
        // Product endpoints
        crate::routes::products::list_products,
        crate::routes::products::create_product,
        // Appointment endpoints
        crate::routes::appointments::create_appointment,
    ),
    components(
        schemas(
            Product, ProductPayload, ProductListing, ProductCategory,
            Appointment, AppointmentPayload, ServiceType,
            CreatedResponse, MessageResponse, DiagnosticsResponse, ErrorResponse, FieldError
        )
    ),
    tags(
        (name = "status", description = "Liveness and diagnostics endpoints"),
        (name = "products", description = "Product listings for Verkoop & Onderdelen"),
        (name = "appointments", description = "Appointment requests from the contact form"),
    ),
    info(
        title = "V.O.F. Van Bladel API",
        version = "0.1.0",
        description = "Product listings and appointment requests"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/docs")
        .url("/openapi.json", ApiDoc::openapi())
        .into()
}

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    errors::StoreError,
    extract::{ValidJson, ValidQuery},
    models::{CreatedResponse, ErrorResponse, Product, ProductListing, ProductPayload, ProductQuery},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/products", get(list_products).post(create_product))
}

/// List products for "Verkoop & Onderdelen", optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(crate::models::ProductQueryParams),
    responses(
        (status = 200, description = "Products, at most `limit`", body = Vec<ProductListing>),
        (status = 422, description = "Invalid category or limit", body = ErrorResponse),
        (status = 500, description = "Document store failure", body = ErrorResponse)
    )
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<ProductQuery>,
) -> Result<Json<Vec<ProductListing>>, StoreError> {
    let products = state.db.list_products(&query).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = CreatedResponse),
        (status = 422, description = "Invalid product fields", body = ErrorResponse),
        (status = 500, description = "Document store failure", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    ValidJson(product): ValidJson<Product>,
) -> Result<(StatusCode, Json<CreatedResponse>), StoreError> {
    let id = state.db.create_product(&product).await?;
    info!("Created product {} in category {}", id, product.category);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

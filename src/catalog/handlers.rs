//! REST API handlers for the store owner
//!
//! Lists the catalog and adds or updates products.

use super::models::{CatalogResponse, Product};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tracing::info;

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/catalog", get(list_products).post(upsert_product))
}

/// Endpoint: GET /catalog
async fn list_products(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: state.catalog.list_all(),
    })
}

/// Endpoint: POST /catalog
/// Adds a product, or replaces the one with the same name.
async fn upsert_product(
    State(state): State<SharedState>,
    Json(payload): Json<Product>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() || payload.price.is_sign_negative() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "product needs a name and a non-negative price" })),
        )
            .into_response();
    }

    let product = state.catalog.add_item(
        payload.name.trim(),
        payload.quantity,
        payload.price,
        payload.description,
    );
    info!(
        product = %product.name,
        quantity = product.quantity,
        price = %product.price,
        "catalog updated"
    );

    Json(product).into_response()
}

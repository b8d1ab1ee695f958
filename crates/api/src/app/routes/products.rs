use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use shelf_core::ProductId;
use shelf_products::NewProduct;
use shelf_store::{ProductFilter, ProductStore, StoreError};

use crate::app::{dto, errors};

pub fn router() -> Router {
    // Exact paths (`/search`, `/filter`) win over the `:id` capture.
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/filter", get(filter_products))
        .route("/:id", put(update_product).delete(delete_product))
}

pub async fn list_products(
    Extension(store): Extension<Arc<dyn ProductStore>>,
) -> axum::response::Response {
    match store.list().await {
        Ok(products) => {
            (StatusCode::OK, Json(dto::products_to_json(&products))).into_response()
        }
        Err(e) => errors::internal_error(e),
    }
}

pub async fn create_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    // A missing name is treated the same as an empty one.
    let new = match NewProduct::new(body.name.unwrap_or_default(), body.price, body.quantity) {
        Ok(v) => v,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": "Content can not be empty!" })),
            )
                .into_response();
        }
    };

    match store.insert(new).await {
        // 200, not 201: the observed contract of this endpoint.
        Ok(product) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::internal_error(e),
    }
}

pub async fn update_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateProductRequest>,
) -> axum::response::Response {
    // Ids are opaque to clients; anything unparseable cannot name an
    // existing record.
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::product_not_found(),
    };

    match store.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return errors::product_not_found(),
        // Lookup failures surface as a bare 500, unlogged; only the update
        // step below gets the logged JSON error body. Known asymmetry of
        // the observed contract, kept for compatibility.
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }

    match store.update(id, body.into_patch()).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Product updated successfully",
                "product": dto::product_to_json(&product),
            })),
        )
            .into_response(),
        Err(StoreError::NotFound) => errors::product_not_found(),
        Err(e) => errors::internal_error(e),
    }
}

pub async fn delete_product(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::product_not_found(),
    };

    match store.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return errors::product_not_found(),
        Err(e) => return errors::internal_error(e),
    }

    match store.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Product deleted successfully" })),
        )
            .into_response(),
        Err(e) => errors::internal_error(e),
    }
}

pub async fn search_products(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let query = match params.query {
        Some(q) if !q.is_empty() => q,
        _ => {
            return errors::validation_error(
                "Query parameter is required for searching products.",
            );
        }
    };

    match store.find(ProductFilter::NameContains(query)).await {
        Ok(products) if products.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": "No products found matching the search criteria.",
            })),
        )
            .into_response(),
        Ok(products) => {
            (StatusCode::OK, Json(dto::products_to_json(&products))).into_response()
        }
        Err(e) => errors::internal_error(e),
    }
}

pub async fn filter_products(
    Extension(store): Extension<Arc<dyn ProductStore>>,
    Query(params): Query<dto::FilterParams>,
) -> axum::response::Response {
    // Both bounds must be present and numeric; nothing else is checked, so
    // an inverted range passes validation and simply matches nothing.
    // "NaN" parses as f64 but is not a number to clients, so it is rejected
    // here too.
    fn parse_bound(s: Option<&str>) -> Option<f64> {
        s.and_then(|s| s.parse::<f64>().ok()).filter(|v| !v.is_nan())
    }

    let bounds =
        parse_bound(params.min_price.as_deref()).zip(parse_bound(params.max_price.as_deref()));

    let Some((min, max)) = bounds else {
        return errors::validation_error("Invalid or missing price range parameters.");
    };

    match store.find(ProductFilter::PriceBetween { min, max }).await {
        Ok(products) if products.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": "No products found within the specified price range.",
            })),
        )
            .into_response(),
        Ok(products) => {
            (StatusCode::OK, Json(dto::products_to_json(&products))).into_response()
        }
        Err(e) => errors::internal_error(e),
    }
}

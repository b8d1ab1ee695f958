use serde::Deserialize;

use shelf_products::{Product, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /products`.
///
/// `name` is optional in shape so its absence can be answered with the
/// specific 400 body instead of a framework rejection. `price` and
/// `quantity` default to zero when omitted and are not range-checked.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
}

/// Body of `PUT /products/:id`; all fields optional, supplied ones
/// overwrite.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Query string of `GET /products/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Query string of `GET /products/filter`.
///
/// Taken as raw strings; numeric parsing is part of handler validation so
/// a malformed value yields the specific 400 body.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.to_string(),
        "name": product.name,
        "price": product.price,
        "quantity": product.quantity,
        "createdAt": product.created_at.to_rfc3339(),
        "updatedAt": product.updated_at.to_rfc3339(),
    })
}

pub fn products_to_json(products: &[Product]) -> serde_json::Value {
    serde_json::Value::Array(products.iter().map(product_to_json).collect())
}

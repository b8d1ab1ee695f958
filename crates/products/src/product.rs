use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelf_core::{DomainError, DomainResult, ProductId};

/// A product record as held by the store.
///
/// `id`, `created_at` and `updated_at` are assigned by the store; everything
/// else comes from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product.
///
/// `name` must be non-empty; `price` and `quantity` are accepted as-is
/// (no range checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewProduct {
    /// Validate and build the creation input.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("name must be non-empty"));
        }
        Ok(Self { name, price, quantity })
    }
}

/// Partial update of a product: only supplied fields overwrite.
///
/// The empty patch is a no-op (apart from the store bumping `updated_at`).
/// Name is not re-validated on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    /// Apply the patch to an existing record, leaving omitted fields intact.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::new(),
            name: "Widget".to_string(),
            price: 9.99,
            quantity: 5,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = NewProduct::new("", 1.0, 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_product_accepts_zero_and_negative_numbers() {
        // Only presence of a name is checked; price/quantity are not
        // range-validated.
        assert!(NewProduct::new("Widget", 0.0, 0).is_ok());
        assert!(NewProduct::new("Widget", -1.5, -3).is_ok());
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut product = test_product();
        let before = product.clone();

        let patch = ProductPatch::default();
        patch.apply_to(&mut product);

        assert_eq!(product, before);
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut product = test_product();

        let patch = ProductPatch {
            name: None,
            price: Some(12.5),
            quantity: None,
        };
        patch.apply_to(&mut product);

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 12.5);
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn patch_may_set_empty_name() {
        // The non-empty rule holds at creation only; updates take whatever
        // the client supplies.
        let mut product = test_product();

        let patch = ProductPatch {
            name: Some(String::new()),
            price: None,
            quantity: None,
        };
        patch.apply_to(&mut product);

        assert_eq!(product.name, "");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: applying a full patch replaces every client field.
            #[test]
            fn full_patch_replaces_all_fields(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in -1.0e6f64..1.0e6,
                quantity in -1_000i64..1_000,
            ) {
                let mut product = test_product();
                let patch = ProductPatch {
                    name: Some(name.clone()),
                    price: Some(price),
                    quantity: Some(quantity),
                };
                patch.apply_to(&mut product);

                prop_assert_eq!(product.name, name);
                prop_assert_eq!(product.price, price);
                prop_assert_eq!(product.quantity, quantity);
            }

            /// Property: patch application is idempotent.
            #[test]
            fn patch_is_idempotent(
                price in -1.0e6f64..1.0e6,
                quantity in -1_000i64..1_000,
            ) {
                let mut product = test_product();
                let patch = ProductPatch {
                    name: None,
                    price: Some(price),
                    quantity: Some(quantity),
                };

                patch.apply_to(&mut product);
                let once = product.clone();
                patch.apply_to(&mut product);

                prop_assert_eq!(product, once);
            }
        }
    }
}

//! In-memory product store for tests and database-less dev runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use shelf_core::ProductId;
use shelf_products::{NewProduct, Product, ProductPatch};

use crate::{ProductFilter, ProductStore, StoreError};

/// In-memory store backed by a `RwLock<HashMap>`.
///
/// Iteration order of the map is the "store default order" for `list`;
/// no ordering is guaranteed.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("product map lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.values().cloned().collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(&id).cloned())
    }

    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(),
            name: new.name,
            price: new.price,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        };

        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        let product = map.get_mut(&id).ok_or(StoreError::NotFound)?;

        patch.apply_to(product);
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(&id);
        Ok(())
    }

    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.values().filter(|p| filter.matches(p)).cloned().collect())
    }
}

//! Persistence layer for product records.
//!
//! Handlers depend only on the [`ProductStore`] trait and receive a concrete
//! implementation by injection: [`InMemoryProductStore`] for tests/dev,
//! [`PostgresProductStore`] when a database is configured. Filtered reads go
//! through the explicit [`ProductFilter`] query specification so the store
//! abstraction stays swappable.

use async_trait::async_trait;
use thiserror::Error;

use shelf_core::ProductId;
use shelf_products::{NewProduct, Product, ProductPatch};

pub mod memory;
pub mod postgres;
pub mod query;

pub use memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use query::ProductFilter;

/// Store-layer error.
///
/// `NotFound` is a normal control-flow outcome; everything else is an
/// operational failure the HTTP layer surfaces as a generic 500.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,

    /// The backend failed (connection, query, lock).
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Persistence operations for product records.
///
/// Each handler issues exactly one call. Identifiers and timestamps are
/// assigned by the store on `insert`; `update` applies only the supplied
/// patch fields and bumps `updated_at`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch every product, store default order.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Fetch one product by id.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a new product, assigning its id and timestamps.
    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError>;

    /// Patch an existing product in place and return the updated record.
    ///
    /// Returns `StoreError::NotFound` if the record vanished between the
    /// handler's lookup and the update.
    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError>;

    /// Delete a product by id. Deleting an absent record is a quiet no-op.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    /// Fetch all products matching the filter.
    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError>;
}

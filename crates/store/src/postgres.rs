//! Postgres-backed product store.
//!
//! Expects a `products` table:
//!
//! ```sql
//! CREATE TABLE products (
//!     id          UUID PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     price       DOUBLE PRECISION NOT NULL,
//!     quantity    BIGINT NOT NULL,
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use shelf_core::ProductId;
use shelf_products::{NewProduct, Product, ProductPatch};

use crate::{ProductFilter, ProductStore, StoreError};

/// Product store on a sqlx connection pool.
///
/// The pool is thread-safe; every operation is a single statement, so no
/// explicit transactions are needed.
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, StoreError> {
    Ok(Product {
        id: ProductId::from_uuid(row.try_get::<Uuid, _>("id").map_err(StoreError::from)?),
        name: row.try_get("name").map_err(StoreError::from)?,
        price: row.try_get("price").map_err(StoreError::from)?,
        quantity: row.try_get("quantity").map_err(StoreError::from)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(StoreError::from)?,
        updated_at: row
            .try_get::<DateTime<Utc>, _>("updated_at")
            .map_err(StoreError::from)?,
    })
}

const PRODUCT_COLUMNS: &str = "id, name, price, quantity, created_at, updated_at";

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(&format!("SELECT {PRODUCT_COLUMNS} FROM products"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        let id = ProductId::new();
        let now = Utc::now();

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO products (id, name, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(&new.name)
        .bind(new.price)
        .bind(new.quantity)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        product_from_row(&row)
    }

    async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        // COALESCE keeps omitted fields intact, matching the in-memory
        // patch semantics.
        let row = sqlx::query(&format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                quantity = COALESCE($4, quantity),
                updated_at = $5
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(patch.name.as_deref())
        .bind(patch.price)
        .bind(patch.quantity)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => product_from_row(&row),
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        // Deleting an absent row is a quiet no-op, same as the in-memory
        // store.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let rows = match filter {
            ProductFilter::NameContains(needle) => {
                sqlx::query(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE name ILIKE '%' || $1 || '%'"
                ))
                .bind(needle)
                .fetch_all(&self.pool)
                .await?
            }
            ProductFilter::PriceBetween { min, max } => {
                sqlx::query(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products WHERE price BETWEEN $1 AND $2"
                ))
                .bind(min)
                .bind(max)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(product_from_row).collect()
    }
}

//! Query specification for filtered product reads.

use shelf_products::Product;

/// A single-field filter: field, operator, value.
///
/// Keeping this explicit (instead of ad-hoc query building in handlers)
/// keeps the store abstraction swappable between backends.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Case-insensitive substring match on `name`.
    NameContains(String),
    /// Inclusive range match on `price`. An inverted range (`min > max`)
    /// is legal and matches nothing.
    PriceBetween { min: f64, max: f64 },
}

impl ProductFilter {
    /// Evaluate the filter against one record (in-memory backend).
    ///
    /// The Postgres backend expresses the same semantics in SQL
    /// (`ILIKE` / `BETWEEN`); the two must stay in agreement.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::NameContains(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::PriceBetween { min, max } => {
                *min <= product.price && product.price <= *max
            }
        }
    }
}

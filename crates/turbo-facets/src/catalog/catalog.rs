//! The immutable product list the engine filters.

use crate::catalog::Product;
use crate::error::FacetError;
use crate::money::{Price, PriceRange};
use serde::Serialize;

/// An ordered, read-only list of products.
///
/// Catalog order is significant: it is the final tie-break of every sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse the data source's JSON array.
    ///
    /// Entries that fail to decode are skipped with a warning rather than
    /// failing the whole catalog. A payload that is not an array is an error.
    pub fn from_json(json: &str) -> Result<Self, FacetError> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let total = raw.len();

        let products: Vec<Product> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<Product>(value) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed catalog entry");
                    None
                }
            })
            .collect();

        tracing::info!(count = products.len(), skipped = total - products.len(), "Loaded catalog");
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `[0, highest price]`, the default "full" price range for this catalog.
    pub fn price_span(&self) -> PriceRange {
        let max = self
            .products
            .iter()
            .map(|p| p.price_numeric)
            .max()
            .unwrap_or(Price::zero());
        PriceRange::new(Price::zero(), max)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

//! Product types as supplied by the catalog data source.

use crate::error::FacetError;
use crate::keys::{Collection, Color, ProductId, SizeToken};
use crate::money::Price;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// The broad product grouping that decides which size and type vocabulary applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFamily {
    /// Flat accessories.
    Mousepad,
    /// Wearables, further split by [`ApparelType`].
    Apparel,
}

impl ProductFamily {
    pub const ALL: [ProductFamily; 2] = [ProductFamily::Mousepad, ProductFamily::Apparel];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductFamily::Mousepad => "mousepad",
            ProductFamily::Apparel => "apparel",
        }
    }

    /// Suffix used by the legacy composite size encoding (`L-pad`, `L-cloth`).
    pub fn size_suffix(&self) -> &'static str {
        match self {
            ProductFamily::Mousepad => "pad",
            ProductFamily::Apparel => "cloth",
        }
    }
}

impl FromStr for ProductFamily {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mousepad" => Ok(ProductFamily::Mousepad),
            "apparel" => Ok(ProductFamily::Apparel),
            _ => Err(FacetError::UnknownCategory(s.to_string())),
        }
    }
}

/// Apparel sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApparelType {
    Hoodie,
    Shirt,
    Sleeve,
}

impl ApparelType {
    pub const ALL: [ApparelType; 3] = [ApparelType::Hoodie, ApparelType::Shirt, ApparelType::Sleeve];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApparelType::Hoodie => "hoodie",
            ApparelType::Shirt => "shirt",
            ApparelType::Sleeve => "sleeve",
        }
    }
}

impl FromStr for ApparelType {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hoodie" => Ok(ApparelType::Hoodie),
            "shirt" => Ok(ApparelType::Shirt),
            "sleeve" => Ok(ApparelType::Sleeve),
            _ => Err(FacetError::UnknownApparelType(s.to_string())),
        }
    }
}

/// A product in the catalog.
///
/// Optional attributes may be missing in source data. A product missing an
/// attribute never matches an active filter on that attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(deserialize_with = "product_id_from_any")]
    pub id: ProductId,
    /// Product family.
    pub category: ProductFamily,
    /// Apparel sub-type (apparel only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apparel_type: Option<ApparelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Comma-joined size tokens, e.g. `"S, M, L"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Price, given as a decimal in the source data.
    pub price_numeric: Price,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Collection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<NaiveDate>,
}

impl Product {
    /// Create a product with only the required attributes set.
    pub fn new(id: impl Into<ProductId>, category: ProductFamily, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            category,
            apparel_type: None,
            color: None,
            size: None,
            price_numeric: price.into(),
            rating: 0.0,
            review_count: 0,
            collection: None,
            added_date: None,
        }
    }

    pub fn with_apparel_type(mut self, apparel_type: ApparelType) -> Self {
        self.apparel_type = Some(apparel_type);
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.size = Some(sizes.into());
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_collection(mut self, collection: impl Into<Collection>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_added_date(mut self, date: NaiveDate) -> Self {
        self.added_date = Some(date);
        self
    }

    /// Apparel sub-type, ignored on products outside the apparel family.
    pub fn garment_type(&self) -> Option<ApparelType> {
        match self.category {
            ProductFamily::Apparel => self.apparel_type,
            ProductFamily::Mousepad => None,
        }
    }

    /// Iterate the trimmed, non-empty size tokens of this product.
    pub fn size_tokens(&self) -> impl Iterator<Item = &str> {
        self.size
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Check whether the product is offered in `token`.
    pub fn has_size(&self, token: &SizeToken) -> bool {
        self.size_tokens().any(|t| t == token.as_str())
    }

    /// Canonical popularity score: rating weighted by review volume.
    pub fn popularity(&self) -> f64 {
        self.rating * f64::from(self.review_count)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Accept both numeric and string ids from the data source.
fn product_id_from_any<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => ProductId::from(n),
        RawId::Text(s) => ProductId::new(s),
    })
}

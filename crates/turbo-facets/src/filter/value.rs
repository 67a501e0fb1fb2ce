//! Filter dimensions, values, selectors and sort modes.

use crate::catalog::{ApparelType, Product, ProductFamily};
use crate::error::FacetError;
use crate::keys::{Collection, Color, SizeToken};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort modes for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Rating times review count, highest first.
    #[default]
    Popularity,
    /// Rating, then review count, highest first.
    Rating,
    /// Price, low to high.
    PriceAscending,
    /// Price, high to low.
    PriceDescending,
    /// Most recently added first.
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Popularity,
        SortMode::Rating,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
        SortMode::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popularity => "popularity",
            SortMode::Rating => "rating",
            SortMode::PriceAscending => "price-ascending",
            SortMode::PriceDescending => "price-descending",
            SortMode::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Popularity => "Most Popular",
            SortMode::Rating => "Highest Rated",
            SortMode::PriceAscending => "Price: Low to High",
            SortMode::PriceDescending => "Price: High to Low",
            SortMode::Newest => "Newest Arrivals",
        }
    }
}

impl FromStr for SortMode {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| FacetError::UnknownSortMode(s.to_string()))
    }
}

/// Category selector shown as the top-level tabs of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Mousepad,
    /// Any apparel product.
    Apparel,
    /// Apparel of one type.
    ApparelType(ApparelType),
}

impl CategoryFilter {
    /// Families whose products can pass this selector.
    pub fn families(&self) -> &'static [ProductFamily] {
        match self {
            CategoryFilter::All => &ProductFamily::ALL,
            CategoryFilter::Mousepad => &[ProductFamily::Mousepad],
            CategoryFilter::Apparel | CategoryFilter::ApparelType(_) => &[ProductFamily::Apparel],
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Mousepad => product.category == ProductFamily::Mousepad,
            CategoryFilter::Apparel => product.category == ProductFamily::Apparel,
            CategoryFilter::ApparelType(t) => product.garment_type() == Some(*t),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Mousepad => "mousepad",
            CategoryFilter::Apparel => "apparel",
            CategoryFilter::ApparelType(t) => t.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "mousepad" => Ok(CategoryFilter::Mousepad),
            "apparel" => Ok(CategoryFilter::Apparel),
            other => other
                .parse::<ApparelType>()
                .map(CategoryFilter::ApparelType)
                .map_err(|_| FacetError::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = FacetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(c: CategoryFilter) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A size token tagged with the family it belongs to.
///
/// `L` for mousepads and `L` for apparel are different sizes; a key only
/// ever matches products of its own family.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeKey {
    pub family: ProductFamily,
    pub token: SizeToken,
}

impl SizeKey {
    pub fn new(family: ProductFamily, token: impl Into<SizeToken>) -> Self {
        Self {
            family,
            token: token.into(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        product.category == self.family && product.has_size(&self.token)
    }
}

/// Parses the composite `<token>-pad` / `<token>-cloth` encoding.
impl FromStr for SizeKey {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, suffix) = s
            .rsplit_once('-')
            .ok_or_else(|| FacetError::InvalidSizeKey(s.to_string()))?;
        let family = ProductFamily::ALL
            .into_iter()
            .find(|f| f.size_suffix() == suffix)
            .ok_or_else(|| FacetError::InvalidSizeKey(s.to_string()))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(FacetError::InvalidSizeKey(s.to_string()));
        }
        Ok(SizeKey::new(family, token))
    }
}

impl TryFrom<String> for SizeKey {
    type Error = FacetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SizeKey> for String {
    fn from(key: SizeKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.token, self.family.size_suffix())
    }
}

/// A steerable filter dimension, i.e. one with staged selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Color,
    Size,
    ApparelType,
    Collection,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Color,
        Dimension::Size,
        Dimension::ApparelType,
        Dimension::Collection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Color => "color",
            Dimension::Size => "size",
            Dimension::ApparelType => "apparelType",
            Dimension::Collection => "collection",
        }
    }
}

impl FromStr for Dimension {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FacetError::UnknownDimension(s.to_string()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single selectable value of a steerable dimension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    Color(Color),
    Size(SizeKey),
    ApparelType(ApparelType),
    Collection(Collection),
}

impl FilterValue {
    pub fn dimension(&self) -> Dimension {
        match self {
            FilterValue::Color(_) => Dimension::Color,
            FilterValue::Size(_) => Dimension::Size,
            FilterValue::ApparelType(_) => Dimension::ApparelType,
            FilterValue::Collection(_) => Dimension::Collection,
        }
    }

    /// Parse a presentation-layer value string for `dimension`.
    pub fn parse(dimension: Dimension, raw: &str) -> Result<Self, FacetError> {
        Ok(match dimension {
            Dimension::Color => FilterValue::Color(Color::from(raw)),
            Dimension::Size => FilterValue::Size(raw.parse()?),
            Dimension::ApparelType => FilterValue::ApparelType(raw.parse()?),
            Dimension::Collection => FilterValue::Collection(Collection::from(raw)),
        })
    }

    /// Check whether a product carries this value.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FilterValue::Color(c) => product.color.as_ref() == Some(c),
            FilterValue::Size(key) => key.matches(product),
            FilterValue::ApparelType(t) => product.garment_type() == Some(*t),
            FilterValue::Collection(c) => product.collection.as_ref() == Some(c),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Color(c) => write!(f, "{}", c),
            FilterValue::Size(key) => write!(f, "{}", key),
            FilterValue::ApparelType(t) => f.write_str(t.as_str()),
            FilterValue::Collection(c) => write!(f, "{}", c),
        }
    }
}

impl From<SizeKey> for FilterValue {
    fn from(key: SizeKey) -> Self {
        FilterValue::Size(key)
    }
}

impl From<Color> for FilterValue {
    fn from(color: Color) -> Self {
        FilterValue::Color(color)
    }
}

impl From<Collection> for FilterValue {
    fn from(collection: Collection) -> Self {
        FilterValue::Collection(collection)
    }
}

impl From<ApparelType> for FilterValue {
    fn from(apparel_type: ApparelType) -> Self {
        FilterValue::ApparelType(apparel_type)
    }
}

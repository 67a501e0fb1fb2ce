//! Engine configuration.

use crate::catalog::{ApparelType, Catalog, ProductFamily};
use crate::error::FacetError;
use crate::filter::{Dimension, FilterValue, SizeKey};
use crate::keys::{Collection, Color, SizeToken};
use crate::money::PriceRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of products revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Products revealed initially and per `load_more`.
    pub page_size: usize,
    /// Full price range used on init and reset. `None` derives it from the catalog.
    pub price_bounds: Option<PriceRange>,
    /// Selectable facet values. Unset lists are derived from the catalog.
    pub vocabulary: VocabularyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            price_bounds: None,
            vocabulary: VocabularyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, FacetError> {
        let config: EngineConfig = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FacetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FacetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Set the page size. Zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.normalized()
    }

    pub fn with_price_bounds(mut self, bounds: PriceRange) -> Self {
        self.price_bounds = Some(bounds);
        self
    }

    /// Pin every vocabulary list instead of deriving it from the catalog.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = VocabularyConfig::from(vocabulary);
        self
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

/// Configured vocabulary lists. `None` derives the list from the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mousepad_sizes: Option<Vec<SizeToken>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apparel_sizes: Option<Vec<SizeToken>>,
}

impl VocabularyConfig {
    /// Fill every unset list from `catalog`.
    pub fn resolve(&self, catalog: &Catalog) -> Vocabulary {
        let derived = Vocabulary::from_catalog(catalog);
        Vocabulary {
            colors: self.colors.clone().unwrap_or(derived.colors),
            collections: self.collections.clone().unwrap_or(derived.collections),
            mousepad_sizes: self.mousepad_sizes.clone().unwrap_or(derived.mousepad_sizes),
            apparel_sizes: self.apparel_sizes.clone().unwrap_or(derived.apparel_sizes),
        }
    }
}

impl From<Vocabulary> for VocabularyConfig {
    fn from(vocabulary: Vocabulary) -> Self {
        Self {
            colors: Some(vocabulary.colors),
            collections: Some(vocabulary.collections),
            mousepad_sizes: Some(vocabulary.mousepad_sizes),
            apparel_sizes: Some(vocabulary.apparel_sizes),
        }
    }
}

/// The selectable values of every steerable dimension.
///
/// Values outside the vocabulary are rejected by the transition function.
/// Lists keep their order, which is also facet display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Vocabulary {
    pub colors: Vec<Color>,
    pub collections: Vec<Collection>,
    pub mousepad_sizes: Vec<SizeToken>,
    pub apparel_sizes: Vec<SizeToken>,
}

fn push_unique<T: PartialEq>(list: &mut Vec<T>, item: T) {
    if !list.contains(&item) {
        list.push(item);
    }
}

impl Vocabulary {
    /// Every distinct value the catalog carries, in first-seen order.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut vocabulary = Self::default();
        for product in catalog {
            if let Some(color) = &product.color {
                push_unique(&mut vocabulary.colors, color.clone());
            }
            if let Some(collection) = &product.collection {
                push_unique(&mut vocabulary.collections, collection.clone());
            }
            let sizes = vocabulary.sizes_mut(product.category);
            for token in product.size_tokens() {
                push_unique(sizes, SizeToken::from(token));
            }
        }
        vocabulary
    }

    pub fn with_colors<I, C>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_collections<I, C>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Collection>,
    {
        self.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, T>(mut self, family: ProductFamily, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SizeToken>,
    {
        *self.sizes_mut(family) = tokens.into_iter().map(Into::into).collect();
        self
    }

    fn sizes_mut(&mut self, family: ProductFamily) -> &mut Vec<SizeToken> {
        match family {
            ProductFamily::Mousepad => &mut self.mousepad_sizes,
            ProductFamily::Apparel => &mut self.apparel_sizes,
        }
    }

    /// Size tokens valid within a family.
    pub fn sizes(&self, family: ProductFamily) -> &[SizeToken] {
        match family {
            ProductFamily::Mousepad => &self.mousepad_sizes,
            ProductFamily::Apparel => &self.apparel_sizes,
        }
    }

    /// Check whether `value` is selectable.
    pub fn contains(&self, value: &FilterValue) -> bool {
        match value {
            FilterValue::Color(c) => self.colors.contains(c),
            FilterValue::Size(key) => self.sizes(key.family).contains(&key.token),
            FilterValue::ApparelType(_) => true,
            FilterValue::Collection(c) => self.collections.contains(c),
        }
    }

    /// Every selectable value of `dimension`, restricted to `families` for sizes.
    pub fn values(&self, dimension: Dimension, families: &[ProductFamily]) -> Vec<FilterValue> {
        match dimension {
            Dimension::Color => self.colors.iter().cloned().map(FilterValue::Color).collect(),
            Dimension::Size => families
                .iter()
                .flat_map(|&family| {
                    self.sizes(family)
                        .iter()
                        .map(move |token| FilterValue::Size(SizeKey::new(family, token.clone())))
                })
                .collect(),
            Dimension::ApparelType => ApparelType::ALL
                .into_iter()
                .map(FilterValue::ApparelType)
                .collect(),
            Dimension::Collection => self
                .collections
                .iter()
                .cloned()
                .map(FilterValue::Collection)
                .collect(),
        }
    }
}

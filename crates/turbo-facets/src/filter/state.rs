//! Filter state: sort, category, staged and active selections.

use crate::catalog::ApparelType;
use crate::filter::{CategoryFilter, Dimension, FilterValue, SizeKey, SortMode};
use crate::keys::{Collection, Color};
use crate::money::PriceRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest selectable minimum rating.
pub const MAX_RATING: f64 = 5.0;

/// One selection set per steerable dimension.
///
/// Used twice in [`FilterState`], once for active and once for pending
/// selections. An empty set means "no constraint" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSets {
    pub colors: BTreeSet<Color>,
    pub sizes: BTreeSet<SizeKey>,
    pub apparel_types: BTreeSet<ApparelType>,
    pub collections: BTreeSet<Collection>,
}

impl FilterSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &FilterValue) -> bool {
        match value {
            FilterValue::Color(c) => self.colors.contains(c),
            FilterValue::Size(k) => self.sizes.contains(k),
            FilterValue::ApparelType(t) => self.apparel_types.contains(t),
            FilterValue::Collection(c) => self.collections.contains(c),
        }
    }

    /// Returns `true` if the value was not present.
    pub fn insert(&mut self, value: FilterValue) -> bool {
        match value {
            FilterValue::Color(c) => self.colors.insert(c),
            FilterValue::Size(k) => self.sizes.insert(k),
            FilterValue::ApparelType(t) => self.apparel_types.insert(t),
            FilterValue::Collection(c) => self.collections.insert(c),
        }
    }

    /// Returns `true` if the value was present.
    pub fn remove(&mut self, value: &FilterValue) -> bool {
        match value {
            FilterValue::Color(c) => self.colors.remove(c),
            FilterValue::Size(k) => self.sizes.remove(k),
            FilterValue::ApparelType(t) => self.apparel_types.remove(t),
            FilterValue::Collection(c) => self.collections.remove(c),
        }
    }

    /// Symmetric difference with `{value}`.
    pub fn toggle(&mut self, value: FilterValue) {
        if !self.remove(&value) {
            self.insert(value);
        }
    }

    pub fn clear(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Color => self.colors.clear(),
            Dimension::Size => self.sizes.clear(),
            Dimension::ApparelType => self.apparel_types.clear(),
            Dimension::Collection => self.collections.clear(),
        }
    }

    /// Check whether a dimension imposes no constraint.
    pub fn is_unconstrained(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Color => self.colors.is_empty(),
            Dimension::Size => self.sizes.is_empty(),
            Dimension::ApparelType => self.apparel_types.is_empty(),
            Dimension::Collection => self.collections.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Dimension::ALL.into_iter().all(|d| self.is_unconstrained(d))
    }

    /// All selected values of one dimension, in sorted order.
    pub fn values_of(&self, dimension: Dimension) -> Vec<FilterValue> {
        match dimension {
            Dimension::Color => self.colors.iter().cloned().map(FilterValue::Color).collect(),
            Dimension::Size => self.sizes.iter().cloned().map(FilterValue::Size).collect(),
            Dimension::ApparelType => self
                .apparel_types
                .iter()
                .copied()
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

    /// All selected values, dimension by dimension.
    pub fn values(&self) -> Vec<FilterValue> {
        Dimension::ALL
            .into_iter()
            .flat_map(|d| self.values_of(d))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len() + self.sizes.len() + self.apparel_types.len() + self.collections.len()
    }

    /// A copy whose `value.dimension()` set is exactly `{value}`.
    pub fn with_only(&self, value: &FilterValue) -> Self {
        let mut sets = self.clone();
        sets.clear(value.dimension());
        sets.insert(value.clone());
        sets
    }
}

/// The complete filter state of one browsing session.
///
/// Only mutated through [`crate::filter::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub sort: SortMode,
    pub category: CategoryFilter,
    /// Selections applied to the visible result set.
    pub active: FilterSets,
    /// Staged selections, committed by `ApplyFilters`.
    pub pending: FilterSets,
    pub price_range: PriceRange,
    pub min_rating: f64,
    /// Full price range restored on reset.
    pub price_bounds: PriceRange,
}

impl FilterState {
    /// Initial state: everything selected, popularity sort, full price range.
    pub fn new(price_bounds: PriceRange) -> Self {
        Self {
            sort: SortMode::default(),
            category: CategoryFilter::All,
            active: FilterSets::new(),
            pending: FilterSets::new(),
            price_range: price_bounds,
            min_rating: 0.0,
            price_bounds,
        }
    }

    /// True iff any dimension's staged selection differs from its active one.
    pub fn has_pending_changes(&self) -> bool {
        self.active != self.pending
    }

    /// Active steerable values, for rendering removable chips.
    pub fn active_filters(&self) -> Vec<FilterValue> {
        self.active.values()
    }

    /// Number of active constraints, counting price and rating when narrowed.
    pub fn active_filter_count(&self) -> usize {
        let mut count = self.active.len();
        if self.category != CategoryFilter::All {
            count += 1;
        }
        if self.price_range != self.price_bounds {
            count += 1;
        }
        if self.min_rating > 0.0 {
            count += 1;
        }
        count
    }

    /// Check whether anything the predicates read differs from `other`.
    pub fn query_differs(&self, other: &FilterState) -> bool {
        self.category != other.category
            || self.active != other.active
            || self.price_range != other.price_range
            || self.min_rating != other.min_rating
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(PriceRange::unbounded())
    }
}
